//! Shared test inputs.

/// Expected wall-clock fields of a successfully parsed value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expected {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    /// Offset in seconds east of UTC.
    pub offset: i32,
}

const fn date(year: i32, month: u32, day: u32) -> Expected {
    Expected {
        year,
        month,
        day,
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
        offset: 0,
    }
}

const fn at(hour: u32, minute: u32, second: u32, millisecond: u32, offset: i32) -> Expected {
    Expected {
        year: 2017,
        month: 4,
        day: 24,
        hour,
        minute,
        second,
        millisecond,
        offset,
    }
}

const HOUR: i32 = 3600;

pub const GOOD_CASES: &[(&str, Expected)] = &[
    ("2017-04-24T09:41:34.502+0100", at(9, 41, 34, 502, HOUR)),
    ("2017-04-24T09:41+0100", at(9, 41, 0, 0, HOUR)),
    ("2017-04-24T09+0100", at(9, 0, 0, 0, HOUR)),
    ("2017-04-24T", date(2017, 4, 24)),
    ("2017-04-24", date(2017, 4, 24)),
    ("2017-04-24T09:41:34+0100", at(9, 41, 34, 0, HOUR)),
    ("2017-04-24T09:41:34.502-0100", at(9, 41, 34, 502, -HOUR)),
    ("2017-04-24T09:41:34.502-01:00", at(9, 41, 34, 502, -HOUR)),
    ("2017-04-24T09:41-01:00", at(9, 41, 0, 0, -HOUR)),
    ("2017-04-24T09-01:00", at(9, 0, 0, 0, -HOUR)),
    ("2017-04-24T09:41:34-0100", at(9, 41, 34, 0, -HOUR)),
    ("2017-04-24T09:41:34.502Z", at(9, 41, 34, 502, 0)),
    ("2017-04-24T09:41:34Z", at(9, 41, 34, 0, 0)),
    ("2017-04-24T09:41Z", at(9, 41, 0, 0, 0)),
    ("2017-04-24T09Z", at(9, 0, 0, 0, 0)),
    ("2017-04-24T09:41:34.089", at(9, 41, 34, 89, 0)),
    ("2017-04-24T09:41", at(9, 41, 0, 0, 0)),
    ("2017-04-24T09", at(9, 0, 0, 0, 0)),
    ("2017-04-24T09:41:34.009", at(9, 41, 34, 9, 0)),
    ("2017-04-24T09:41:34.893", at(9, 41, 34, 893, 0)),
    ("2017-04-24T09:41:34.89312523Z", at(9, 41, 34, 893, 0)),
    ("2017-04-24T09:41:34.502-0530", at(9, 41, 34, 502, -(5 * HOUR + 1800))),
    ("2017-04-24T09:41:34.502+0530", at(9, 41, 34, 502, 5 * HOUR + 1800)),
    ("2017-04-24T09:41:34.502+05:30", at(9, 41, 34, 502, 5 * HOUR + 1800)),
    ("2017-04-24T09:41:34.502+05:45", at(9, 41, 34, 502, 5 * HOUR + 2700)),
    ("2017-04-24T09:41:34.502+00", at(9, 41, 34, 502, 0)),
    ("2017-04-24T09:41:34.502+0000", at(9, 41, 34, 502, 0)),
    ("2017-04-24T09:41:34.502+00:00", at(9, 41, 34, 502, 0)),
    ("2017-04-24T09:41:34.502\u{2212}01:00", at(9, 41, 34, 502, -HOUR)),
    ("2017-04-24T09:41:34.502+01:00:30", at(9, 41, 34, 502, HOUR + 30)),
    ("2020-02-29", date(2020, 2, 29)),
    ("2000-02-29", date(2000, 2, 29)),
    ("0001-01-01", date(1, 1, 1)),
];

/// Values with every field populated, used for round trips.
pub const ROUND_TRIP_VALUES: &[&str] = &[
    "2017-04-26T11:13:04.123456789Z",
    "2017-04-26T11:13:04.123456789+01:00",
    "1999-12-31T23:59:59.999999999-12:00",
    "2000-02-29T00:00:00.000000001+05:45",
    "0000-01-01T00:00:00Z",
    "9999-12-31T23:59:59.999999999+23:59:59",
    "2024-06-30T12:00:00.000500000-00:30",
];
