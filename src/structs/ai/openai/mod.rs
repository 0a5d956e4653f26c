pub mod openai_choice;
pub mod openai_error_response;
pub mod openai_request;
pub mod openai_response;
pub mod openai_response_message;
pub mod openai_usage;
