use chrono::Utc;

use crate::{
    error::{Error, Result},
    types::Track,
};

/// Index of the playback state in the raw cmus status fields (can be
/// `playing`, `stopped`, `exiting`, ...).
const PLAYBACK_STATUS_INDEX: usize = 1;

/// Index of the first track attribute value; the remaining values follow at
/// every other field.
const TRACK_VALUES_OFFSET: usize = 3;

/// Number of track attributes cmus reports, in declared order.
const TRACK_FIELD_COUNT: usize = 8;

/// Builds a [`Track`] from the raw cmus status fields.
///
/// cmus hands its status over as an ordered sequence of strings, alternating
/// attribute names and values (`status playing file /x.mp3 artist Air ...`).
/// Returns `Ok(None)` when the playback state is anything other than
/// `playing`; that is an expected signal, not an error. Input with fewer
/// fields than a well-formed status is rejected with [`Error::Status`].
pub fn track_from_status(status: &[String]) -> Result<Option<Track>> {
    let state = status
        .get(PLAYBACK_STATUS_INDEX)
        .ok_or_else(|| Error::Status("missing playback state field".to_string()))?;

    if state != "playing" {
        return Ok(None);
    }

    let required = TRACK_VALUES_OFFSET + 2 * (TRACK_FIELD_COUNT - 1) + 1;
    if status.len() < required {
        return Err(Error::Status(format!(
            "expected at least {} fields, got {}",
            required,
            status.len()
        )));
    }

    let value = |i: usize| status[TRACK_VALUES_OFFSET + 2 * i].clone();

    Ok(Some(Track {
        filepath: value(0),
        artist: value(1),
        album_artist: value(2),
        album: value(3),
        track_number: value(4),
        title: value(5),
        date: value(6),
        duration: value(7),
    }))
}

/// Current Unix time as the decimal string Last.fm expects for `timestamp`.
pub fn scrobble_timestamp() -> String {
    Utc::now().timestamp().to_string()
}
