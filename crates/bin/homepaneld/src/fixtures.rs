//! Startup check of the served fixture documents.
//!
//! The panel parses the documents in the browser; checking them here with
//! the same domain types surfaces a broken home before anyone opens the page.
//! Missing or malformed documents abort startup. Features the panel would
//! skip (unknown kind, invalid value) are only logged.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use homepanel_app::ports::fixture_api::FixturePath;
use homepanel_domain::feature::Feature;
use homepanel_domain::room::{HouseDocument, Room, RoomMap};
use homepanel_domain::value::ControlValue;

/// Fixture errors.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed fixture {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What the check found.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FixtureSummary {
    pub home_features: usize,
    pub rooms: usize,
    pub room_features: usize,
    /// Features the panel will skip, as `{document}: {reason}`.
    pub skipped: Vec<String>,
}

/// Parse the house, the rooms index and every room document of `home`.
///
/// # Errors
///
/// Returns [`FixtureError`] when a document is missing or malformed.
pub fn check_home(fixtures_dir: &Path, home: &str) -> Result<FixtureSummary, FixtureError> {
    let mut summary = FixtureSummary::default();

    let house_path = fixtures_dir.join(FixturePath::House.for_home(home));
    let house: HouseDocument = read_json(&house_path)?;
    summary.home_features = house.home.features.len();
    check_features(&house_path, &house.home.features, &mut summary);

    let rooms_path = fixtures_dir.join(FixturePath::Rooms.for_home(home));
    let rooms: RoomMap = read_json::<RoomMap>(&rooms_path)?.normalized();
    summary.rooms = rooms.len();

    for (id, _) in rooms.iter() {
        let room_path = fixtures_dir.join(FixturePath::Room(id).for_home(home));
        let room = read_json::<Room>(&room_path)?.normalized(id);
        summary.room_features += room.features.len();
        check_features(&room_path, &room.features, &mut summary);
    }

    for option in house
        .home
        .features
        .iter()
        .flat_map(|feature| &feature.options)
    {
        if rooms.get(&option.id).is_none() {
            tracing::warn!(room = %option.id, "room selector offers a room missing from rooms.json");
            summary
                .skipped
                .push(format!("{}: unknown room {}", house_path.display(), option.id));
        }
    }

    Ok(summary)
}

fn check_features(path: &Path, features: &[Feature], summary: &mut FixtureSummary) {
    for feature in features {
        let checked = feature
            .kind()
            .and_then(|kind| ControlValue::from_feature_value(kind, &feature.current_value));
        if let Err(err) = checked {
            tracing::warn!(
                path = %path.display(),
                feature = %feature.id,
                error = %err,
                "feature will be skipped by the panel"
            );
            summary
                .skipped
                .push(format!("{}: {err}", path.display()));
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
