mod contact;
mod contact_api;
mod health_check;
mod helper;
