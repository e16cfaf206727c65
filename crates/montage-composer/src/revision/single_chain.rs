//! 50 pixel single-chain prototype

use super::{DEFAULT_SETTLE_DELAY_MS, HardwareRevision};
use crate::geometry::{Montage, MontageTable, Segment};

const fn r(start: u16, end: u16) -> Segment {
    Segment::range(0, start, end)
}

const WHOLE: &[Segment] = &[r(0, 50)];

static MONTAGES: [Montage; 8] = [
    Montage {
        name: "bipolar",
        segments: &[r(0, 14), r(20, 34), r(37, 44)],
    },
    Montage {
        name: "transverse",
        segments: &[r(0, 4), r(10, 19), r(34, 38), r(45, 50)],
    },
    Montage {
        name: "infant",
        segments: WHOLE,
    },
    Montage {
        name: "sphenoidal",
        segments: WHOLE,
    },
    Montage {
        name: "anteroposterior",
        segments: WHOLE,
    },
    Montage {
        name: "hatband",
        segments: WHOLE,
    },
    Montage {
        name: "brain_death",
        segments: WHOLE,
    },
    Montage {
        name: "electrodes",
        segments: WHOLE,
    },
];

pub static SINGLE_CHAIN: HardwareRevision = HardwareRevision {
    name: "single-chain",
    montages: MontageTable {
        chains: &[50],
        montages: &MONTAGES,
    },
    intensity_ceiling: u8::MAX,
    settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
};
