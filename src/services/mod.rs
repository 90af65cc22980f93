pub mod billing;
pub mod export;
pub mod notes;
pub mod parties;
pub mod products;
pub mod stock;
pub mod values;
pub mod workers;

pub use billing::BillingService;
pub use export::ExportService;
pub use notes::NoteService;
pub use parties::PartyService;
pub use products::ProductService;
pub use stock::StockService;
pub use workers::WorkerService;
