mod listing;

pub use listing::ListingForm;
