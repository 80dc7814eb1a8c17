mod destination_factory;
mod presenter_factory;

pub use destination_factory::{DestinationFactory, DestinationType};
pub use presenter_factory::PresenterFactory;
