pub mod nav;
pub mod valuation_form;
