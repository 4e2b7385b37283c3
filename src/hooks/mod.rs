pub mod use_api;
pub mod use_dashboard;
pub mod use_indoor_detail;
pub mod use_indoors;
pub mod use_mutation;
pub mod use_mutations;
pub mod use_resource;
pub mod use_toasts;
pub mod use_user_id;
