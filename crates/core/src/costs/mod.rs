//! Costs module - conversion to CHF, aggregation, duty, and display formatting.

mod cost_engine;
mod cost_model;
mod formatting;
mod summary;

pub use cost_engine::{calculate_costs, convert_to_home, line_total, subtotal};
pub use cost_model::CostBreakdown;
pub use formatting::{currency_option_label, format_amount, format_home_amount, format_rate};
pub use summary::render_summary;
