//! Points calculation for the receipt processor.
//!
//! This module contains the fixed scoring rules applied to a receipt: points
//! for the retailer name, bonuses on the receipt total, points for items and
//! their descriptions, and bonuses for the purchase date and time. It also
//! contains the field parsing those rules share.

mod items;
mod parsing;
mod points_calculator;
mod purchase_date_time;
mod retailer_name;
mod total;

pub use items::{
    DESCRIPTION_LENGTH_MULTIPLE, ITEM_PAIR_POINTS, item_description_points, item_pair_points,
    item_price_multiplier, score_items,
};
pub use parsing::{parse_amount, parse_purchase_date, parse_purchase_time};
pub use points_calculator::{calculate_breakdown, calculate_points, sum_step_points};
pub use purchase_date_time::{
    AFTERNOON_END_HOUR, AFTERNOON_POINTS, AFTERNOON_START_HOUR, ODD_DAY_POINTS, afternoon_points,
    odd_day_points, score_purchase_date_time,
};
pub use retailer_name::{count_alphanumeric, score_retailer_name};
pub use total::{
    QUARTER_MULTIPLE_POINTS, ROUND_DOLLAR_POINTS, is_quarter_multiple, is_round_dollar,
    score_total,
};
