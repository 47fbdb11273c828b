//! Rookie contract scale (values in millions)

use crate::models::Contract;

/// (years, total, average) for first-round picks 1..=30
const FIRST_ROUND: [(u32, f64, f64); 30] = [
    (4, 54.07, 13.52),
    (4, 48.48, 12.12),
    (4, 43.39, 10.85),
    (4, 38.85, 9.71),
    (4, 34.84, 8.71),
    (4, 31.33, 7.83),
    (4, 28.28, 7.07),
    (4, 25.62, 6.41),
    (4, 23.32, 5.83),
    (4, 21.31, 5.33),
    (4, 19.58, 4.90),
    (4, 18.08, 4.52),
    (4, 16.74, 4.19),
    (4, 15.63, 3.91),
    (4, 14.59, 3.65),
    (4, 13.74, 3.43),
    (4, 12.92, 3.23),
    (4, 12.24, 3.06),
    (4, 11.60, 2.90),
    (4, 11.00, 2.75),
    (4, 10.47, 2.62),
    (4, 9.96, 2.49),
    (4, 9.49, 2.37),
    (4, 9.05, 2.26),
    (4, 8.66, 2.17),
    (4, 8.29, 2.07),
    (4, 7.97, 1.99),
    (4, 7.66, 1.92),
    (4, 7.35, 1.84),
    (4, 7.09, 1.77),
];

pub const SECOND_ROUND_PICK: u32 = 31;

pub fn second_round_contract() -> Contract {
    Contract { years: 2, total: 3.2, average: 1.6, pick: SECOND_ROUND_PICK }
}

pub fn undrafted_contract() -> Contract {
    Contract { years: 1, total: 1.1, average: 1.1, pick: 0 }
}

/// Entry contract for a draft slot. Unknown slots fall back to undrafted terms.
pub fn contract_for_pick(pick: u32) -> Contract {
    match pick {
        0 => undrafted_contract(),
        1..=30 => {
            let (years, total, average) = FIRST_ROUND[(pick - 1) as usize];
            Contract { years, total, average, pick }
        }
        _ => second_round_contract(),
    }
}
