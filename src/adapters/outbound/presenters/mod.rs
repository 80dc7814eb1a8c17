/// Presenter adapters, one per supported output format
mod csv_presenter;
mod json_presenter;
mod text_presenter;

pub use csv_presenter::CsvPresenter;
pub use json_presenter::JsonPresenter;
pub use text_presenter::TextPresenter;
