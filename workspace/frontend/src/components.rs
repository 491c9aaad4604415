pub mod dashboard;
pub mod layout;
pub mod prediction_form;
pub mod results_display;
