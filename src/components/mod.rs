pub mod dashboard;
pub mod dominant_card;
pub mod forecast_board;
pub mod pollutant_grid;
pub mod pollutant_modal;
pub mod prediction_dialog;

pub use dashboard::Dashboard;
pub use dominant_card::DominantCard;
pub use forecast_board::ForecastBoard;
pub use pollutant_grid::PollutantGrid;
pub use pollutant_modal::PollutantModal;
pub use prediction_dialog::PredictionDialog;
