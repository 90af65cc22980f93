// Catalog
pub mod category;
pub mod manufacturer;
pub mod product;

// Stock ledgers
pub mod stock;
pub mod stock_position;

// Parties
pub mod contractor;
pub mod shop;
pub mod store;

// Staff
pub mod worker;

// Delivery notes
pub mod note;
pub mod note_position;

// Financial documents
pub mod advance_invoice;
pub mod invoice;
pub mod payment;
pub mod receipt;
