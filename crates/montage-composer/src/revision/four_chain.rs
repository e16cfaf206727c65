//! Four chain headform
//!
//! Chain 0 runs over the crown, chains 1 and 2 cover the left and right
//! temporal arcs, chain 3 closes the occipital loop.

use super::{DEFAULT_SETTLE_DELAY_MS, HardwareRevision};
use crate::geometry::{Montage, MontageTable, Segment};

/// Keeps roughly 500 lit pixels inside the supply budget
const INTENSITY_CEILING: u8 = 64;

const fn r(chain: u8, start: u16, end: u16) -> Segment {
    Segment::range(chain, start, end)
}

const fn s(chain: u8, index: u16) -> Segment {
    Segment::single(chain, index)
}

static MONTAGES: [Montage; 9] = [
    Montage {
        name: "bipolar",
        segments: &[
            r(0, 0, 24),
            r(0, 40, 72),
            r(0, 96, 120),
            r(1, 0, 18),
            r(1, 30, 46),
            r(2, 0, 18),
            r(2, 34, 50),
            r(3, 0, 32),
            r(3, 64, 96),
            s(3, 120),
        ],
    },
    Montage {
        name: "transverse",
        segments: &[
            r(0, 24, 40),
            r(0, 72, 96),
            r(0, 150, 168),
            r(1, 18, 30),
            r(2, 18, 34),
            r(3, 32, 48),
            r(3, 100, 112),
        ],
    },
    Montage {
        name: "hatband",
        segments: &[
            r(0, 0, 12),
            r(0, 180, 192),
            r(1, 0, 69),
            r(2, 0, 79),
            r(3, 140, 159),
        ],
    },
    Montage {
        name: "temporal",
        segments: &[
            r(1, 10, 40),
            s(1, 52),
            s(1, 60),
            r(2, 12, 44),
            s(2, 60),
            s(2, 70),
            s(0, 88),
            s(0, 104),
        ],
    },
    Montage {
        name: "cz_ref",
        segments: &[
            r(0, 84, 108),
            s(0, 120),
            s(0, 132),
            r(1, 46, 58),
            r(2, 50, 62),
            r(3, 48, 64),
        ],
    },
    Montage {
        name: "ear_ref",
        segments: &[r(1, 58, 69), r(2, 68, 79), s(0, 0), s(0, 191), r(3, 150, 159)],
    },
    Montage {
        name: "large",
        segments: &[r(0, 0, 192), r(1, 0, 69), r(2, 0, 79), r(3, 0, 159)],
    },
    Montage {
        name: "small",
        segments: &[r(0, 48, 144), r(1, 20, 50), r(2, 24, 56), r(3, 40, 120)],
    },
    Montage {
        name: "eci",
        segments: &[
            s(0, 10),
            s(0, 30),
            s(0, 50),
            s(0, 70),
            s(0, 90),
            s(0, 110),
            s(0, 130),
            s(0, 150),
            s(0, 170),
            s(1, 5),
            s(1, 25),
            s(1, 45),
            s(2, 5),
            s(2, 30),
            s(2, 55),
            s(3, 10),
            s(3, 50),
            s(3, 90),
            s(3, 130),
        ],
    },
];

pub static FOUR_CHAIN: HardwareRevision = HardwareRevision {
    name: "four-chain",
    montages: MontageTable {
        chains: &[192, 69, 79, 159],
        montages: &MONTAGES,
    },
    intensity_ceiling: INTENSITY_CEILING,
    settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
};
