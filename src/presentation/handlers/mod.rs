mod health;
mod tools;

pub use health::health_handler;
pub use tools::{
    AttachmentPayload, ErrorResponse, InvokeToolRequest, ToolListResponse, invoke_tool_handler,
    list_tools_handler,
};
