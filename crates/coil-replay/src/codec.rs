//! Binary encode/decode for the `SNRP` replay format.
//!
//! All integers are big-endian. The header is fixed-width; it is followed
//! by two counted lists (events, then food spawns) with fixed-size
//! entries. There is no padding, checksum, or compression.
//!
//! Decoding is tolerant of a short tail: a list whose declared count
//! overruns the buffer yields only the entries that fit, and a buffer that
//! ends before the food count yields no food. Everything else that is
//! structurally wrong is a [`ReplayError`].

use std::io::{Read, Write};

use tracing::debug;

use crate::error::{ReplayError, ReplayList};
use crate::types::*;
use crate::{FORMAT_VERSION, MAGIC};

/// Buffers shorter than this are rejected outright.
pub const MIN_REPLAY_LEN: usize = 32;
/// Size of the fixed header, up to and including the event count.
pub const HEADER_LEN: usize = 28;
/// Encoded size of one [`ReplayEvent`].
pub const EVENT_LEN: usize = 7;
/// Encoded size of one [`FoodSpawn`].
pub const FOOD_LEN: usize = 6;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), ReplayError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a signed byte.
pub fn write_i8(w: &mut dyn Write, v: i8) -> Result<(), ReplayError> {
    w.write_all(&v.to_be_bytes())?;
    Ok(())
}

/// Write a big-endian u16.
pub fn write_u16_be(w: &mut dyn Write, v: u16) -> Result<(), ReplayError> {
    w.write_all(&v.to_be_bytes())?;
    Ok(())
}

/// Write a big-endian u32.
pub fn write_u32_be(w: &mut dyn Write, v: u32) -> Result<(), ReplayError> {
    w.write_all(&v.to_be_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, ReplayError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a signed byte.
pub fn read_i8(r: &mut dyn Read) -> Result<i8, ReplayError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(i8::from_be_bytes(buf))
}

/// Read a big-endian u16.
pub fn read_u16_be(r: &mut dyn Read) -> Result<u16, ReplayError> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

/// Read a big-endian u32.
pub fn read_u32_be(r: &mut dyn Read) -> Result<u32, ReplayError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

// ── Entry encode/decode ─────────────────────────────────────────

fn encode_event(w: &mut dyn Write, ev: &ReplayEvent) -> Result<(), ReplayError> {
    write_u32_be(w, ev.frame)?;
    write_i8(w, ev.direction)?;
    write_u16_be(w, ev.delta_ms)?;
    Ok(())
}

fn decode_event(r: &mut dyn Read) -> Result<ReplayEvent, ReplayError> {
    Ok(ReplayEvent {
        frame: read_u32_be(r)?,
        direction: read_i8(r)?,
        delta_ms: read_u16_be(r)?,
    })
}

fn encode_food(w: &mut dyn Write, food: &FoodSpawn) -> Result<(), ReplayError> {
    write_u32_be(w, food.frame)?;
    write_u8(w, food.x)?;
    write_u8(w, food.y)?;
    Ok(())
}

fn decode_food(r: &mut dyn Read) -> Result<FoodSpawn, ReplayError> {
    Ok(FoodSpawn {
        frame: read_u32_be(r)?,
        x: read_u8(r)?,
        y: read_u8(r)?,
    })
}

// ── Replay encode ───────────────────────────────────────────────

/// Number of bytes [`encode_replay`] writes for `record`.
pub fn encoded_len(record: &ReplayRecord) -> usize {
    HEADER_LEN + record.events.len() * EVENT_LEN + 2 + record.food_spawns.len() * FOOD_LEN
}

fn list_count(list: ReplayList, count: usize) -> Result<u16, ReplayError> {
    u16::try_from(count).map_err(|_| ReplayError::TooManyEntries { list, count })
}

/// Encode a replay in the `SNRP` v1 layout.
///
/// Fails before writing anything if either list has more than
/// `u16::MAX` entries.
pub fn encode_replay(w: &mut dyn Write, record: &ReplayRecord) -> Result<(), ReplayError> {
    let event_count = list_count(ReplayList::Events, record.events.len())?;
    let food_count = list_count(ReplayList::FoodSpawns, record.food_spawns.len())?;

    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;

    write_u32_be(w, record.seed)?;
    write_u8(w, record.difficulty)?;
    write_u8(w, record.board_width)?;
    write_u8(w, record.board_height)?;
    write_u32_be(w, record.final_score)?;
    write_u16_be(w, record.final_size)?;
    write_u32_be(w, record.total_frames)?;
    write_u32_be(w, record.total_time_ms)?;

    write_u16_be(w, event_count)?;
    for ev in &record.events {
        encode_event(w, ev)?;
    }

    write_u16_be(w, food_count)?;
    for food in &record.food_spawns {
        encode_food(w, food)?;
    }

    Ok(())
}

/// Encode a replay into a fresh buffer.
pub fn encode_replay_to_vec(record: &ReplayRecord) -> Result<Vec<u8>, ReplayError> {
    let mut buf = Vec::with_capacity(encoded_len(record));
    encode_replay(&mut buf, record)?;
    Ok(buf)
}

// ── Replay decode ───────────────────────────────────────────────

/// Decode a replay buffer.
///
/// Never panics. Over-declared lists are truncated to what the buffer
/// holds, and a missing food count means no food; both still decode
/// successfully. Frames must be non-decreasing within each list.
///
/// # Examples
///
/// ```
/// use coil_replay::codec::{decode_replay, encode_replay_to_vec};
/// use coil_replay::{ReplayError, ReplayEvent, ReplayRecord};
/// use coil_core::Direction;
///
/// let record = ReplayRecord {
///     events: vec![ReplayEvent::new(0, Direction::Up, 0)],
///     ..ReplayRecord::default()
/// };
/// let bytes = encode_replay_to_vec(&record).unwrap();
/// assert_eq!(decode_replay(&bytes).unwrap(), record);
///
/// assert!(matches!(
///     decode_replay(&bytes[..20]),
///     Err(ReplayError::TooShort { len: 20 })
/// ));
/// ```
pub fn decode_replay(bytes: &[u8]) -> DecodedReplay {
    if bytes.len() < MIN_REPLAY_LEN {
        return Err(ReplayError::TooShort { len: bytes.len() });
    }
    let mut r = bytes;

    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(ReplayError::InvalidMagic);
    }

    let version = read_u8(&mut r)?;
    if version != FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion { found: version });
    }

    let mut record = ReplayRecord {
        seed: read_u32_be(&mut r)?,
        difficulty: read_u8(&mut r)?,
        board_width: read_u8(&mut r)?,
        board_height: read_u8(&mut r)?,
        final_score: read_u32_be(&mut r)?,
        final_size: read_u16_be(&mut r)?,
        total_frames: read_u32_be(&mut r)?,
        total_time_ms: read_u32_be(&mut r)?,
        events: Vec::new(),
        food_spawns: Vec::new(),
    };
    if record.board().is_empty() {
        return Err(ReplayError::EmptyBoard {
            width: record.board_width,
            height: record.board_height,
        });
    }

    let event_count = usize::from(read_u16_be(&mut r)?);
    record.events.reserve(event_count.min(r.len() / EVENT_LEN));
    while record.events.len() < event_count && r.len() >= EVENT_LEN {
        record.events.push(decode_event(&mut r)?);
    }
    if record.events.len() < event_count {
        debug!(
            declared = event_count,
            parsed = record.events.len(),
            "replay event list truncated"
        );
    }
    check_order(ReplayList::Events, record.events.iter().map(|e| e.frame))?;

    if r.len() < 2 {
        debug!(events = record.events.len(), "replay ends before food count");
        return Ok(record);
    }

    let food_count = usize::from(read_u16_be(&mut r)?);
    record.food_spawns.reserve(food_count.min(r.len() / FOOD_LEN));
    while record.food_spawns.len() < food_count && r.len() >= FOOD_LEN {
        record.food_spawns.push(decode_food(&mut r)?);
    }
    if record.food_spawns.len() < food_count {
        debug!(
            declared = food_count,
            parsed = record.food_spawns.len(),
            "replay food list truncated"
        );
    }
    check_order(ReplayList::FoodSpawns, record.food_spawns.iter().map(|f| f.frame))?;

    Ok(record)
}

/// Reject a list whose frames ever decrease.
fn check_order(list: ReplayList, frames: impl Iterator<Item = u32>) -> Result<(), ReplayError> {
    let mut previous = 0u32;
    for (index, frame) in frames.enumerate() {
        if frame < previous {
            return Err(ReplayError::OutOfOrder {
                list,
                index,
                frame,
                previous,
            });
        }
        previous = frame;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_record() -> ReplayRecord {
        ReplayRecord {
            seed: 0x0102_0304,
            difficulty: 2,
            board_width: 80,
            board_height: 24,
            final_score: 0x0A0B_0C0D,
            final_size: 0x0E0F,
            total_frames: 0x1112_1314,
            total_time_ms: 0x1516_1718,
            events: vec![
                ReplayEvent {
                    frame: 1,
                    direction: 3,
                    delta_ms: 250,
                },
                ReplayEvent {
                    frame: 9,
                    direction: 4,
                    delta_ms: 400,
                },
            ],
            food_spawns: vec![FoodSpawn {
                frame: 0,
                x: 10,
                y: 20,
            }],
        }
    }

    fn encode(record: &ReplayRecord) -> Vec<u8> {
        encode_replay_to_vec(record).unwrap()
    }

    // ── Primitives ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn roundtrip_u16(v in any::<u16>()) {
            let mut buf = Vec::new();
            write_u16_be(&mut buf, v).unwrap();
            prop_assert_eq!(buf.as_slice(), &v.to_be_bytes()[..]);
            let got = read_u16_be(&mut buf.as_slice()).unwrap();
            prop_assert_eq!(v, got);
        }

        #[test]
        fn roundtrip_u32(v in any::<u32>()) {
            let mut buf = Vec::new();
            write_u32_be(&mut buf, v).unwrap();
            let got = read_u32_be(&mut buf.as_slice()).unwrap();
            prop_assert_eq!(v, got);
        }

        #[test]
        fn roundtrip_i8(v in any::<i8>()) {
            let mut buf = Vec::new();
            write_i8(&mut buf, v).unwrap();
            let got = read_i8(&mut buf.as_slice()).unwrap();
            prop_assert_eq!(v, got);
        }
    }

    #[test]
    fn short_read_is_io_error() {
        let buf = [0u8; 3];
        let result = read_u32_be(&mut buf.as_slice());
        assert!(matches!(result, Err(ReplayError::Io(_))));
    }

    // ── Layout ──────────────────────────────────────────────────

    #[test]
    fn header_fields_sit_at_fixed_offsets() {
        let buf = encode(&sample_record());
        assert_eq!(&buf[0..4], b"SNRP");
        assert_eq!(buf[4], 1);
        assert_eq!(&buf[5..9], &[1, 2, 3, 4]);
        assert_eq!(buf[9], 2);
        assert_eq!(buf[10], 80);
        assert_eq!(buf[11], 24);
        assert_eq!(&buf[12..16], &[0x0A, 0x0B, 0x0C, 0x0D]);
        assert_eq!(&buf[16..18], &[0x0E, 0x0F]);
        assert_eq!(&buf[18..22], &[0x11, 0x12, 0x13, 0x14]);
        assert_eq!(&buf[22..26], &[0x15, 0x16, 0x17, 0x18]);
        assert_eq!(&buf[26..28], &[0, 2]);
        // First event: frame 1, dir 3, delta 250.
        assert_eq!(&buf[28..35], &[0, 0, 0, 1, 3, 0, 250]);
        // Food count follows the second event.
        assert_eq!(&buf[42..44], &[0, 1]);
        assert_eq!(&buf[44..50], &[0, 0, 0, 0, 10, 20]);
        assert_eq!(buf.len(), encoded_len(&sample_record()));
    }

    #[test]
    fn roundtrip_sample() {
        let record = sample_record();
        let got = decode_replay(&encode(&record)).unwrap();
        assert_eq!(got, record);
    }

    #[test]
    fn negative_direction_byte_survives() {
        let mut record = sample_record();
        record.events[0].direction = -7;
        let got = decode_replay(&encode(&record)).unwrap();
        assert_eq!(got.events[0].direction, -7);
        assert_eq!(got.events[0].direction(), None);
    }

    // ── Rejections ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn any_buffer_under_32_bytes_is_too_short(
            bytes in prop::collection::vec(any::<u8>(), 0..MIN_REPLAY_LEN),
        ) {
            let result = decode_replay(&bytes);
            let is_too_short = matches!(result, Err(ReplayError::TooShort { len }) if len == bytes.len());
            prop_assert!(is_too_short);
        }
    }

    #[test]
    fn short_buffer_with_valid_prefix_is_too_short() {
        let buf = encode(&sample_record());
        assert!(matches!(
            decode_replay(&buf[..31]),
            Err(ReplayError::TooShort { len: 31 })
        ));
    }

    #[test]
    fn bad_magic_rejected() {
        let mut buf = encode(&sample_record());
        buf[0] = b'X';
        assert!(matches!(
            decode_replay(&buf),
            Err(ReplayError::InvalidMagic)
        ));
    }

    #[test]
    fn bad_version_rejected() {
        for version in [0u8, 2, 99, 255] {
            let mut buf = encode(&sample_record());
            buf[4] = version;
            let result = decode_replay(&buf);
            assert!(
                matches!(result, Err(ReplayError::UnsupportedVersion { found }) if found == version),
                "version {version} should be unsupported"
            );
        }
    }

    #[test]
    fn zero_board_dimension_rejected() {
        let mut record = sample_record();
        record.board_height = 0;
        assert!(matches!(
            decode_replay(&encode(&record)),
            Err(ReplayError::EmptyBoard {
                width: 80,
                height: 0
            })
        ));
        record.board_height = 24;
        record.board_width = 0;
        assert!(matches!(
            decode_replay(&encode(&record)),
            Err(ReplayError::EmptyBoard { width: 0, .. })
        ));
    }

    #[test]
    fn empty_lists_encode_below_minimum_length() {
        // Header plus two zero counts is 30 bytes, under the 32-byte floor.
        let record = ReplayRecord::default();
        let buf = encode(&record);
        assert_eq!(buf.len(), 30);
        assert!(matches!(
            decode_replay(&buf),
            Err(ReplayError::TooShort { len: 30 })
        ));
    }

    // ── Truncated tails ─────────────────────────────────────────

    #[test]
    fn overdeclared_event_count_keeps_what_fits() {
        let mut record = sample_record();
        record.events.push(ReplayEvent {
            frame: 12,
            direction: 2,
            delta_ms: 1,
        });
        record.food_spawns.clear();
        let mut buf = encode(&record);
        assert_eq!(buf.len(), HEADER_LEN + 3 * EVENT_LEN + 2);
        // Claim nine events; only three (plus the zero food count) follow.
        buf[26..28].copy_from_slice(&9u16.to_be_bytes());

        let got = decode_replay(&buf).unwrap();
        assert_eq!(got.events, record.events);
        assert!(got.food_spawns.is_empty());
    }

    #[test]
    fn overdeclared_food_count_keeps_what_fits() {
        let mut record = sample_record();
        record.food_spawns.push(FoodSpawn {
            frame: 4,
            x: 3,
            y: 3,
        });
        let mut buf = encode(&record);
        let food_count_at = HEADER_LEN + record.events.len() * EVENT_LEN;
        buf[food_count_at..food_count_at + 2].copy_from_slice(&40u16.to_be_bytes());

        let got = decode_replay(&buf).unwrap();
        assert_eq!(got.food_spawns, record.food_spawns);
        assert_eq!(got.events, record.events);
    }

    #[test]
    fn partial_food_entry_is_dropped() {
        let mut record = sample_record();
        record.food_spawns.push(FoodSpawn {
            frame: 4,
            x: 3,
            y: 3,
        });
        let buf = encode(&record);
        let got = decode_replay(&buf[..buf.len() - 3]).unwrap();
        assert_eq!(got.food_spawns, record.food_spawns[..1]);
    }

    #[test]
    fn missing_food_count_keeps_events() {
        let mut record = sample_record();
        record.food_spawns.clear();
        let buf = encode(&record);
        let events_end = HEADER_LEN + record.events.len() * EVENT_LEN;

        for cut in [events_end, events_end + 1] {
            let got = decode_replay(&buf[..cut]).unwrap();
            assert_eq!(got.events, record.events);
            assert!(got.food_spawns.is_empty());
        }
    }

    // ── Frame order ─────────────────────────────────────────────

    #[test]
    fn decreasing_event_frames_rejected() {
        let mut record = sample_record();
        record.events[1].frame = 0;
        let result = decode_replay(&encode(&record));
        match result {
            Err(ReplayError::OutOfOrder {
                list,
                index,
                frame,
                previous,
            }) => {
                assert_eq!(list, ReplayList::Events);
                assert_eq!((index, frame, previous), (1, 0, 1));
            }
            other => panic!("expected OutOfOrder, got {other:?}"),
        }
    }

    #[test]
    fn decreasing_food_frames_rejected() {
        let mut record = sample_record();
        record.food_spawns = vec![
            FoodSpawn {
                frame: 8,
                x: 1,
                y: 1,
            },
            FoodSpawn {
                frame: 7,
                x: 2,
                y: 2,
            },
        ];
        assert!(matches!(
            decode_replay(&encode(&record)),
            Err(ReplayError::OutOfOrder {
                list: ReplayList::FoodSpawns,
                index: 1,
                ..
            })
        ));
    }

    #[test]
    fn equal_frames_are_in_order() {
        let mut record = sample_record();
        record.events[1].frame = record.events[0].frame;
        assert_eq!(decode_replay(&encode(&record)).unwrap(), record);
    }

    // ── Encoder limits ──────────────────────────────────────────

    #[test]
    fn too_many_events_fail_before_writing() {
        let mut record = sample_record();
        record.events = vec![
            ReplayEvent {
                frame: 0,
                direction: 2,
                delta_ms: 0,
            };
            usize::from(u16::MAX) + 1
        ];
        let mut buf = Vec::new();
        let result = encode_replay(&mut buf, &record);
        assert!(matches!(
            result,
            Err(ReplayError::TooManyEntries {
                list: ReplayList::Events,
                count: 65_536
            })
        ));
        assert!(buf.is_empty());
    }

    // ── Round trip ──────────────────────────────────────────────

    fn arb_record() -> impl Strategy<Value = ReplayRecord> {
        let header = (
            any::<u32>(),
            any::<u8>(),
            1u8..=255,
            1u8..=255,
            any::<u32>(),
            any::<u16>(),
            any::<u32>(),
            any::<u32>(),
        );
        let events = prop::collection::vec((any::<u32>(), any::<i8>(), any::<u16>()), 1..16);
        let food = prop::collection::vec((any::<u32>(), any::<u8>(), any::<u8>()), 0..16);
        (header, events, food).prop_map(|(h, mut events, mut food)| {
            events.sort_by_key(|e| e.0);
            food.sort_by_key(|f| f.0);
            ReplayRecord {
                seed: h.0,
                difficulty: h.1,
                board_width: h.2,
                board_height: h.3,
                final_score: h.4,
                final_size: h.5,
                total_frames: h.6,
                total_time_ms: h.7,
                events: events
                    .into_iter()
                    .map(|(frame, direction, delta_ms)| ReplayEvent {
                        frame,
                        direction,
                        delta_ms,
                    })
                    .collect(),
                food_spawns: food
                    .into_iter()
                    .map(|(frame, x, y)| FoodSpawn { frame, x, y })
                    .collect(),
            }
        })
    }

    proptest! {
        #[test]
        fn roundtrip_record(record in arb_record()) {
            let buf = encode(&record);
            prop_assert_eq!(buf.len(), encoded_len(&record));
            let got = decode_replay(&buf).unwrap();
            prop_assert_eq!(got, record);
        }

        #[test]
        fn any_prefix_decodes_without_panicking(record in arb_record(), cut in 0usize..256) {
            let buf = encode(&record);
            let cut = cut.min(buf.len());
            if let Ok(got) = decode_replay(&buf[..cut]) {
                prop_assert!(got.events.len() <= record.events.len());
                prop_assert_eq!(got.seed, record.seed);
            }
        }
    }
}
