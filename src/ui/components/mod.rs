pub mod history_table;
pub mod kpi_card;
pub mod ranked_table;
pub mod score_badge;
pub mod toast;
