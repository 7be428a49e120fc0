/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests from stdin
/// 2. Routes tool calls to the cycle tracker's store
/// 3. Sends JSON-RPC responses to stdout

use std::collections::HashMap;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::mcp::protocol::*;
use crate::domain::{MoodKind, SymptomKind};
use crate::tools;
use crate::{CycleTrackerServer, ServerError};

/// MCP server that handles communication with the client
pub struct McpServer {
    /// The underlying cycle tracker server
    cycle_tracker: CycleTrackerServer,
    /// Whether the client has finished initialization
    initialized: bool,
}

impl McpServer {
    pub fn new(cycle_tracker: CycleTrackerServer) -> Self {
        Self {
            cycle_tracker,
            initialized: false,
        }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    ///
    /// Returns `None` for blank lines and notifications, which get no reply.
    pub(crate) fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        if request.method.starts_with("notifications/") {
            if request.method == "notifications/initialized" {
                self.initialized = true;
            }
            debug!("Received notification: {}", request.method);
            return None;
        }

        Some(self.handle_request(request))
    }

    fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(request.id, json!(null))
            }
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request),
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: ServerInfo {
                name: "Cycle Tracker MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        respond(request.id, &result)
    }

    fn handle_tools_list(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let symptom_keys: Vec<&str> = SymptomKind::CATALOGUE.iter().map(|k| k.key()).collect();
        let mood_keys: Vec<&str> = MoodKind::CATALOGUE.iter().map(|k| k.key()).collect();

        let tools = vec![
            ToolDefinition {
                name: "cycle_log".to_string(),
                description: "Record a menstrual cycle (period start, optional end, flow)".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "start_date": {"type": "string", "description": "First day of the period (YYYY-MM-DD)"},
                        "end_date": {"type": "string", "description": "Last day of the period (YYYY-MM-DD, optional)"},
                        "flow": {"type": "string", "enum": ["light", "medium", "heavy"], "description": "Flow intensity (optional, defaults to medium)"},
                        "notes": {"type": "string", "description": "Optional notes"}
                    },
                    "required": ["start_date"]
                }),
            },
            ToolDefinition {
                name: "symptom_log".to_string(),
                description: "Log a symptom for today or a specific date".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "date": {"type": "string", "description": "Date observed (YYYY-MM-DD, optional - defaults to today)"},
                        "type": {"type": "string", "description": format!("Symptom: {}, or free text", symptom_keys.join(", "))},
                        "severity": {"type": "string", "enum": ["mild", "moderate", "severe"], "description": "Severity (optional, defaults to moderate)"},
                        "notes": {"type": "string", "description": "Optional notes"}
                    },
                    "required": ["type"]
                }),
            },
            ToolDefinition {
                name: "mood_log".to_string(),
                description: "Log mood and energy level for today or a specific date".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "date": {"type": "string", "description": "Date (YYYY-MM-DD, optional - defaults to today)"},
                        "mood": {"type": "string", "description": format!("Mood: {}, or free text", mood_keys.join(", "))},
                        "energy": {"type": "integer", "minimum": 1, "maximum": 10, "description": "Energy level 1-10 (optional, defaults to 5)"},
                        "notes": {"type": "string", "description": "Optional notes"}
                    },
                    "required": ["mood"]
                }),
            },
            ToolDefinition {
                name: "cycle_history".to_string(),
                description: "List recorded cycles, symptoms and moods, most recently added first".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "collection": {"type": "string", "enum": ["cycles", "symptoms", "moods", "all"], "description": "Which records to list (optional, defaults to all)"},
                        "limit": {"type": "integer", "minimum": 0, "description": "Maximum records per collection (optional)"}
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "cycle_forecast".to_string(),
                description: "Predict days until the next period and ovulation, with reminders".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "as_of": {"type": "string", "description": "Reference day (YYYY-MM-DD, optional - defaults to today)"}
                    },
                    "required": []
                }),
            },
        ];

        JsonRpcResponse::success(request.id, json!({"tools": tools}))
    }

    fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        if !self.initialized {
            debug!("Tool call received before the client sent initialized");
        }

        let tool_params: ToolCallParams = match request.params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        let result = match tool_params.name.as_str() {
            "cycle_log" => self.call_cycle_log(tool_params.arguments),
            "symptom_log" => self.call_symptom_log(tool_params.arguments),
            "mood_log" => self.call_mood_log(tool_params.arguments),
            "cycle_history" => self.call_cycle_history(tool_params.arguments),
            "cycle_forecast" => self.call_cycle_forecast(tool_params.arguments),
            _ => ToolCallResult::error(format!("Unknown tool: {}", tool_params.name)),
        };

        respond(request.id, &result)
    }

    fn call_cycle_log(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::LogCycleParams = match parse_arguments(args) {
            Ok(p) => p,
            Err(result) => return result,
        };

        match tools::log_cycle(self.cycle_tracker.store_mut(), params) {
            Ok(response) => ToolCallResult::success(format!("{}\nCycle ID: {}", response.message, response.cycle_id)),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    fn call_symptom_log(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::LogSymptomParams = match parse_arguments(args) {
            Ok(p) => p,
            Err(result) => return result,
        };

        match tools::log_symptom(self.cycle_tracker.store_mut(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    fn call_mood_log(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::LogMoodParams = match parse_arguments(args) {
            Ok(p) => p,
            Err(result) => return result,
        };

        match tools::log_mood(self.cycle_tracker.store_mut(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    fn call_cycle_history(&self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::HistoryParams = match parse_arguments(args) {
            Ok(p) => p,
            Err(result) => return result,
        };

        match tools::list_history(self.cycle_tracker.store(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    fn call_cycle_forecast(&self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::ForecastParams = match parse_arguments(args) {
            Ok(p) => p,
            Err(result) => return result,
        };

        match tools::get_forecast(self.cycle_tracker.store(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }
}

/// Decode tool arguments into a parameter struct, or an error result
fn parse_arguments<T: DeserializeOwned>(args: HashMap<String, Value>) -> Result<T, ToolCallResult> {
    let object: serde_json::Map<String, Value> = args.into_iter().collect();
    serde_json::from_value(Value::Object(object))
        .map_err(|e| ToolCallResult::error(format!("Invalid arguments: {}", e)))
}

/// Serialize a result body into a success response
fn respond<T: serde::Serialize>(id: Value, body: &T) -> JsonRpcResponse {
    match serde_json::to_value(body) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            format!("Failed to serialize result: {}", e),
            None,
        ),
    }
}
