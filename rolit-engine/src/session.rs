//! Session metadata persisted alongside the board: who is playing, the
//! round schedule, per-round results and the cosmetic theme id.
//!
//! The session never looks at the board; the driver tallies a finished
//! round with [`Board::score`](crate::Board::score) and hands the result to
//! [`GameSession::finish_round`].

use crate::board::Color;
use crate::rules::Score;

/// One round's result, one entry per color in Red, Yellow, Green, Blue
/// order. `None` until the round has been played out.
pub type RoundScores = [Option<u8>; 4];

/// Everything about a game session except the board itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameSession {
    start_bias: u8,
    player_count: u8,
    ai_count: u8,
    round_count: u8,
    current_round: u8,
    round_scores: Vec<RoundScores>,
    theme_id: u8,
}

impl GameSession {
    /// Start a fresh session. `start_bias` rotates the player-to-color
    /// mapping so the first-moving color varies between sessions.
    ///
    /// # Panics
    /// If any field is outside the range the save format can hold:
    /// 1-4 players, 0-3 AIs, 1-4 rounds, bias 0-3, theme 0-63.
    pub fn new(
        player_count: u8,
        ai_count: u8,
        round_count: u8,
        start_bias: u8,
        theme_id: u8,
    ) -> Self {
        assert!((1..=4).contains(&player_count), "player count out of range");
        assert!(ai_count <= 3, "AI count out of range");
        assert!((1..=4).contains(&round_count), "round count out of range");
        assert!(start_bias <= 3, "start bias out of range");
        assert!(theme_id <= 63, "theme id out of range");

        Self {
            start_bias,
            player_count,
            ai_count,
            round_count,
            current_round: 0,
            round_scores: vec![[None; 4]; round_count as usize],
            theme_id,
        }
    }

    /// Reassemble a session from decoded save fields. The codec's bit masks
    /// already constrain every scalar to its legal range.
    pub(crate) fn from_parts(
        start_bias: u8,
        player_count: u8,
        ai_count: u8,
        round_count: u8,
        current_round: u8,
        round_scores: Vec<RoundScores>,
        theme_id: u8,
    ) -> Self {
        debug_assert_eq!(round_scores.len(), round_count as usize);
        Self {
            start_bias,
            player_count,
            ai_count,
            round_count,
            current_round,
            round_scores,
            theme_id,
        }
    }

    pub fn start_bias(&self) -> u8 {
        self.start_bias
    }

    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    pub fn ai_count(&self) -> u8 {
        self.ai_count
    }

    pub fn round_count(&self) -> u8 {
        self.round_count
    }

    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    /// One entry per scheduled round.
    pub fn round_scores(&self) -> &[RoundScores] {
        &self.round_scores
    }

    /// The cosmetic theme id (0-63). Meaningful only to renderers; the
    /// rules and the codec treat it as an opaque number.
    pub fn theme_id(&self) -> u8 {
        self.theme_id
    }

    /// The color that moves on turn `turn` (0-59 within a round). Player
    /// indices cycle through the turn counter and the start bias rotates
    /// the index-to-color mapping.
    pub fn color_for_turn(&self, turn: u8) -> Color {
        let index = (turn % self.player_count + self.start_bias) % 4;
        Color::ALL[index as usize]
    }

    /// Record the finished round's tally.
    pub fn finish_round(&mut self, score: Score) {
        let [red, yellow, green, blue] = score.to_array();
        self.round_scores[self.current_round as usize] =
            [Some(red), Some(yellow), Some(green), Some(blue)];
    }

    /// Move on to the next round.
    ///
    /// # Panics
    /// If the session has no rounds left.
    pub fn advance_round(&mut self) {
        assert!(
            self.current_round + 1 < self.round_count,
            "no rounds left in the session"
        );
        self.current_round += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_unscored() {
        let session = GameSession::new(4, 2, 3, 0, 7);
        assert_eq!(session.current_round(), 0);
        assert_eq!(session.round_scores(), &[[None; 4]; 3]);
        assert_eq!(session.theme_id(), 7);
    }

    #[test]
    fn turn_colors_cycle_through_players() {
        let session = GameSession::new(3, 0, 1, 0, 0);
        let colors: Vec<Color> = (0..6).map(|turn| session.color_for_turn(turn)).collect();
        assert_eq!(
            colors,
            vec![
                Color::Red,
                Color::Yellow,
                Color::Green,
                Color::Red,
                Color::Yellow,
                Color::Green
            ]
        );
    }

    #[test]
    fn start_bias_rotates_colors() {
        let session = GameSession::new(2, 0, 1, 3, 0);
        assert_eq!(session.color_for_turn(0), Color::Blue);
        assert_eq!(session.color_for_turn(1), Color::Red);
        assert_eq!(session.color_for_turn(2), Color::Blue);
    }

    #[test]
    fn round_bookkeeping() {
        let mut session = GameSession::new(2, 1, 2, 0, 0);
        session.finish_round(Score {
            red: 40,
            yellow: 24,
            green: 0,
            blue: 0,
        });
        assert_eq!(
            session.round_scores()[0],
            [Some(40), Some(24), Some(0), Some(0)]
        );
        assert_eq!(session.round_scores()[1], [None; 4]);

        session.advance_round();
        assert_eq!(session.current_round(), 1);
    }

    #[test]
    #[should_panic(expected = "no rounds left")]
    fn advancing_past_last_round_panics() {
        let mut session = GameSession::new(2, 0, 1, 0, 0);
        session.advance_round();
    }

    #[test]
    #[should_panic(expected = "player count out of range")]
    fn zero_players_rejected() {
        GameSession::new(0, 0, 1, 0, 0);
    }

    #[test]
    #[should_panic(expected = "theme id out of range")]
    fn oversized_theme_rejected() {
        GameSession::new(2, 0, 1, 0, 64);
    }
}
