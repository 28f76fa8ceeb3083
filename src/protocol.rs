//! Wire messages exchanged with the match server
//!
//! Every message is a JSON envelope `{"event": "...", "data": {...}}`.
//! Decoding is lenient: snapshots are never validated, missing kinematic
//! fields come through as NaN and unknown enum strings fall back to a
//! sensible default instead of rejecting the whole message.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A participant's identity for this connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    P1,
    P2,
    #[default]
    Spectator,
}

impl Role {
    /// The side this role plays on, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Role::P1 => Some(Side::P1),
            Role::P2 => Some(Side::P2),
            Role::Spectator => None,
        }
    }

    pub fn is_player(self) -> bool {
        self.side().is_some()
    }
}

/// One of the two playing roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    P1,
    P2,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::P1, Side::P2];
}

/// Active sport variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Phase {
    #[default]
    Soccer,
    American,
    Basket,
}

impl From<String> for Phase {
    fn from(s: String) -> Self {
        match s.as_str() {
            "american" => Phase::American,
            "basket" => Phase::Basket,
            _ => Phase::Soccer,
        }
    }
}

/// Match status as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum MatchStatus {
    #[default]
    Waiting,
    Playing,
    Goal,
    GameOver,
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "waiting" => MatchStatus::Waiting,
            "goal" => MatchStatus::Goal,
            "game_over" => MatchStatus::GameOver,
            _ => MatchStatus::Playing,
        }
    }
}

fn nan() -> f32 {
    f32::NAN
}

/// Numbers pass through; `null` or any other shape becomes NaN
fn lenient_f32<'de, D: Deserializer<'de>>(de: D) -> Result<f32, D::Error> {
    Ok(Value::deserialize(de)?
        .as_f64()
        .map_or(f32::NAN, |v| v as f32))
}

fn lenient_score<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    Ok(Value::deserialize(de)?
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0))
}

/// `null` or a non-string is treated like an unrecognized name
fn lenient_enum<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => T::from(s),
        _ => T::from(String::new()),
    })
}

/// Anything other than "p1" or "p2" means no winner
fn lenient_side<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Side>, D::Error> {
    Ok(match Value::deserialize(de)?.as_str() {
        Some("p1") => Some(Side::P1),
        Some("p2") => Some(Side::P2),
        _ => None,
    })
}

fn or_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// Per-player kinematics and score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    #[serde(default = "nan", deserialize_with = "lenient_f32")]
    pub x: f32,
    #[serde(default = "nan", deserialize_with = "lenient_f32")]
    pub y: f32,
    /// Body orientation (degrees)
    #[serde(default = "nan", deserialize_with = "lenient_f32")]
    pub angle: f32,
    /// Limb swing (degrees)
    #[serde(default = "nan", deserialize_with = "lenient_f32")]
    pub leg_angle: f32,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: u32,
}

impl Default for PlayerSnapshot {
    fn default() -> Self {
        Self {
            x: f32::NAN,
            y: f32::NAN,
            angle: f32::NAN,
            leg_angle: f32::NAN,
            score: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    #[serde(default = "nan", deserialize_with = "lenient_f32")]
    pub x: f32,
    #[serde(default = "nan", deserialize_with = "lenient_f32")]
    pub y: f32,
}

impl Default for BallSnapshot {
    fn default() -> Self {
        Self {
            x: f32::NAN,
            y: f32::NAN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Players {
    #[serde(default, deserialize_with = "or_default")]
    pub p1: PlayerSnapshot,
    #[serde(default, deserialize_with = "or_default")]
    pub p2: PlayerSnapshot,
}

impl Players {
    pub fn get(&self, side: Side) -> &PlayerSnapshot {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }
}

/// Complete authoritative world state at one instant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "lenient_enum")]
    pub phase: Phase,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub status: MatchStatus,
    #[serde(default, deserialize_with = "lenient_side")]
    pub winner: Option<Side>,
    #[serde(default, deserialize_with = "or_default")]
    pub players: Players,
    #[serde(default, deserialize_with = "or_default")]
    pub ball: BallSnapshot,
}

/// Messages received from the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Inbound {
    AssignRole { role: Role },
    StateUpdate(Snapshot),
    GoalEvent { scorer: Side },
}

/// Messages sent to the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Outbound {
    PlayerInput { role: Side },
    RestartGame,
}

/// Parse one inbound envelope
pub fn decode(text: &str) -> Result<Inbound, serde_json::Error> {
    serde_json::from_str(text)
}

/// Serialize one outbound envelope
pub fn encode(msg: &Outbound) -> String {
    // Plain enums of strings cannot fail to serialize
    serde_json::to_string(msg).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_state_update() {
        let text = r#"{"event":"state_update","data":{
            "phase":"basket","status":"game_over","winner":"p1",
            "players":{
                "p1":{"x":150,"y":350,"angle":45,"leg_angle":-20,"score":3,"vx":1.5,"id":"abc"},
                "p2":{"x":650,"y":350,"angle":0,"leg_angle":0,"score":1}
            },
            "ball":{"x":400,"y":200,"vx":0,"vy":0}
        }}"#;

        let Inbound::StateUpdate(snap) = decode(text).unwrap() else {
            panic!("expected state update");
        };
        assert_eq!(snap.phase, Phase::Basket);
        assert_eq!(snap.status, MatchStatus::GameOver);
        assert_eq!(snap.winner, Some(Side::P1));
        assert_eq!(snap.players.p1.x, 150.0);
        assert_eq!(snap.players.p1.angle, 45.0);
        assert_eq!(snap.players.p1.leg_angle, -20.0);
        assert_eq!(snap.players.p1.score, 3);
        assert_eq!(snap.players.get(Side::P2).x, 650.0);
        assert_eq!(snap.ball.y, 200.0);
    }

    #[test]
    fn test_missing_fields_decode_as_nan() {
        // The server omits leg_angle entirely and may send a null winner
        let text = r#"{"event":"state_update","data":{
            "phase":"soccer","status":"playing","winner":null,
            "players":{"p1":{"x":1,"y":2,"angle":0,"score":0},"p2":{}},
            "ball":{"x":5}
        }}"#;

        let Inbound::StateUpdate(snap) = decode(text).unwrap() else {
            panic!("expected state update");
        };
        assert!(snap.players.p1.leg_angle.is_nan());
        assert!(snap.players.p2.x.is_nan());
        assert_eq!(snap.players.p2.score, 0);
        assert_eq!(snap.ball.x, 5.0);
        assert!(snap.ball.y.is_nan());
        assert_eq!(snap.winner, None);
    }

    #[test]
    fn test_null_fields_decode_leniently() {
        let text = r#"{"event":"state_update","data":{
            "phase":null,"status":"game_over","winner":"draw",
            "players":{
                "p1":{"x":null,"y":"high","angle":10,"leg_angle":null,"score":9},
                "p2":null
            },
            "ball":null
        }}"#;

        let Inbound::StateUpdate(snap) = decode(text).unwrap() else {
            panic!("expected state update");
        };
        assert_eq!(snap.phase, Phase::Soccer);
        assert_eq!(snap.status, MatchStatus::GameOver);
        assert_eq!(snap.winner, None);
        assert!(snap.players.p1.x.is_nan());
        assert!(snap.players.p1.y.is_nan());
        assert_eq!(snap.players.p1.angle, 10.0);
        assert_eq!(snap.players.p1.score, 9);
        assert!(snap.players.p2.x.is_nan());
        assert!(snap.ball.x.is_nan());

        let text = r#"{"event":"state_update","data":{
            "phase":"basket","status":null,"winner":null,
            "players":{"p1":{"score":null},"p2":{"score":-3}}
        }}"#;
        let Inbound::StateUpdate(snap) = decode(text).unwrap() else {
            panic!("expected state update");
        };
        assert_eq!(snap.phase, Phase::Basket);
        assert_eq!(snap.status, MatchStatus::Playing);
        assert_eq!(snap.players.p1.score, 0);
        assert_eq!(snap.players.p2.score, 0);
    }

    #[test]
    fn test_unknown_enum_strings_fall_back() {
        let text = r#"{"event":"state_update","data":{"phase":"curling","status":"paused"}}"#;
        let Inbound::StateUpdate(snap) = decode(text).unwrap() else {
            panic!("expected state update");
        };
        assert_eq!(snap.phase, Phase::Soccer);
        assert_eq!(snap.status, MatchStatus::Playing);
    }

    #[test]
    fn test_decode_role_and_goal() {
        assert_eq!(
            decode(r#"{"event":"assign_role","data":{"role":"spectator"}}"#).unwrap(),
            Inbound::AssignRole {
                role: Role::Spectator
            }
        );
        assert_eq!(
            decode(r#"{"event":"goal_event","data":{"scorer":"p2"}}"#).unwrap(),
            Inbound::GoalEvent { scorer: Side::P2 }
        );
    }

    #[test]
    fn test_decode_rejects_unknown_event() {
        assert!(decode(r#"{"event":"chat","data":{"text":"hi"}}"#).is_err());
        assert!(decode("not json").is_err());
    }

    #[test]
    fn test_encode_outbound() {
        assert_eq!(
            encode(&Outbound::PlayerInput { role: Side::P1 }),
            r#"{"event":"player_input","data":{"role":"p1"}}"#
        );
        assert_eq!(encode(&Outbound::RestartGame), r#"{"event":"restart_game"}"#);
    }

    #[test]
    fn test_role_side() {
        assert_eq!(Role::P1.side(), Some(Side::P1));
        assert_eq!(Role::P2.side(), Some(Side::P2));
        assert!(!Role::Spectator.is_player());
    }
}
