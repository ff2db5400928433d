use crate::models::Room;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Room list snapshot as exported from a chat account
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RoomSnapshot {
    #[serde(default)]
    pub rooms: Vec<Room>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not read room snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid room snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load(path: &Path) -> Result<Vec<Room>, SnapshotError> {
    let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: RoomSnapshot =
        serde_json::from_str(&contents).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("loaded {} rooms from {}", snapshot.rooms.len(), path.display());
    Ok(snapshot.rooms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Membership, RoomNotifState};
    use std::io::Write;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_with_defaults() {
        let file = write_snapshot(
            r#"{
                "rooms": [
                    { "room_id": "!a:hs", "name": "Standup", "tags": ["u.work"],
                      "notification_count": 4, "highlight_count": 1,
                      "notif_state": "mentions_only" },
                    { "room_id": "!b:hs", "membership": "invite" }
                ]
            }"#,
        );

        let rooms = load(file.path()).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].tags, vec!["u.work".to_string()]);
        assert_eq!(rooms[0].notif_state, RoomNotifState::MentionsOnly);
        assert_eq!(rooms[0].notification_count, 4);
        assert_eq!(rooms[1].membership, Membership::Invite);
        assert_eq!(rooms[1].notif_state, RoomNotifState::AllMessages);
        assert_eq!(rooms[1].display_name(), "!b:hs");
    }

    #[test]
    fn test_empty_document_has_no_rooms() {
        let file = write_snapshot("{}");
        assert!(load(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn test_bad_json() {
        let file = write_snapshot(r#"{ "rooms": [ { "name": "no id" } ] }"#);
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
        assert!(err.to_string().contains("invalid room snapshot"));
    }
}
