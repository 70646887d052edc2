//! JSON command protocol for scripted agents.
//!
//! Every command runs against a headless `TestHarness`; screen coordinates
//! are relative to the harness container.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use shared::FileMeta;

use crate::harness::TestHarness;
use crate::state::{MenuAction, PanelKind};

/// Context menu entries addressable from JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    AddChat,
    AddFile,
}

impl From<MenuChoice> for MenuAction {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::AddChat => MenuAction::AddChat,
            MenuChoice::AddFile => MenuAction::AddFile,
        }
    }
}

/// A command an agent can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Create a panel at a canvas position
    CreatePanel { kind: PanelKind, x: f32, y: f32 },
    /// Close a panel (cascades for upload panels)
    RemovePanel { id: String },
    MovePanel { id: String, x: f32, y: f32 },
    BringToFront { id: String },
    /// Add files to an upload panel
    AddFiles { panel_id: String, files: Vec<FileMeta> },
    RemoveFile { panel_id: String, name: String },
    /// "Chat about files" on an upload panel
    ChatAboutFiles { panel_id: String },
    /// "Get insights" on an upload panel
    GetInsights { panel_id: String },
    ZoomIn,
    ZoomOut,
    /// Secondary click at a screen point
    RightClick { x: f32, y: f32 },
    /// Pick an entry of the open context menu
    ChooseMenu { action: MenuChoice },
    /// Drag a panel header by a screen-space delta
    Drag { id: String, dx: f32, dy: f32 },
    /// List all panels
    Inspect,
    /// List connector lines
    Links,
    /// Clear the whole board
    Clear,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn unknown_panel(id: &str) -> CommandResponse {
    CommandResponse::err(format!("Unknown panel: {id}"))
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::CreatePanel { kind, x, y } => {
            let id = harness.create_panel(kind, x, y);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        AgentCommand::RemovePanel { id } => {
            let removed = harness.close(&id);
            if removed.is_empty() {
                return unknown_panel(&id);
            }
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        AgentCommand::MovePanel { id, x, y } => {
            if harness.move_panel(&id, x, y) {
                CommandResponse::ok()
            } else {
                unknown_panel(&id)
            }
        }

        AgentCommand::BringToFront { id } => {
            if harness.bring_to_front(&id) {
                CommandResponse::ok_with_data(serde_json::json!({ "z_index": harness.z_of(&id) }))
            } else {
                unknown_panel(&id)
            }
        }

        AgentCommand::AddFiles { panel_id, files } => {
            if harness.board.intake_mut(&panel_id).is_none() {
                return CommandResponse::err(format!("Not an upload panel: {panel_id}"));
            }
            let accepted = harness.add_files(&panel_id, files);
            let total = harness.board.files_of(&panel_id).len();
            CommandResponse::ok_with_data(serde_json::json!({
                "accepted": accepted,
                "file_count": total,
            }))
        }

        AgentCommand::RemoveFile { panel_id, name } => {
            let removed = harness.remove_file(&panel_id, &name);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        AgentCommand::ChatAboutFiles { panel_id } => match harness.chat_about_files(&panel_id) {
            Some(id) => CommandResponse::ok_with_data(serde_json::json!({ "id": id })),
            None => CommandResponse::err("No files to chat about"),
        },

        AgentCommand::GetInsights { panel_id } => {
            let ids = harness.get_insights(&panel_id);
            CommandResponse::ok_with_data(serde_json::json!({
                "created": ids,
                "insight_count": harness.insight_count(&panel_id),
            }))
        }

        AgentCommand::ZoomIn => {
            harness.board.zoom_in();
            CommandResponse::ok_with_data(serde_json::json!({ "zoom": harness.zoom() }))
        }

        AgentCommand::ZoomOut => {
            harness.board.zoom_out();
            CommandResponse::ok_with_data(serde_json::json!({ "zoom": harness.zoom() }))
        }

        AgentCommand::RightClick { x, y } => {
            harness.right_click(x, y);
            let pos = harness.board.menu.canvas_pos().map(|p| [p.x, p.y]);
            CommandResponse::ok_with_data(serde_json::json!({
                "menu_visible": harness.menu_visible(),
                "canvas_pos": pos,
            }))
        }

        AgentCommand::ChooseMenu { action } => match harness.choose_menu(action.into()) {
            Some(id) => CommandResponse::ok_with_data(serde_json::json!({ "id": id })),
            None => CommandResponse::err("Context menu is not open"),
        },

        AgentCommand::Drag { id, dx, dy } => {
            if harness.drag_panel(&id, Vec2::new(dx, dy)) {
                let pos = harness.position_of(&id).map(|p| [p.x, p.y]);
                CommandResponse::ok_with_data(serde_json::json!({ "position": pos }))
            } else {
                CommandResponse::err(format!("Panel header not reachable: {id}"))
            }
        }

        AgentCommand::Inspect => {
            let panels: Vec<serde_json::Value> = harness
                .board
                .registry
                .panels()
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id,
                        "kind": p.kind(),
                        "x": p.position.x,
                        "y": p.position.y,
                        "z_index": p.z_index,
                        "source_panel_id": p.source_panel_id,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "panel_count": panels.len(),
                "panels": panels,
                "zoom": harness.zoom(),
                "menu_visible": harness.menu_visible(),
            }))
        }

        AgentCommand::Links => {
            let links: Vec<serde_json::Value> = harness
                .links()
                .iter()
                .map(|l| {
                    serde_json::json!({
                        "source_id": l.source_id,
                        "insight_id": l.insight_id,
                        "from": [l.from.x, l.from.y],
                        "to": [l.to.x, l.to.y],
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({ "links": links }))
        }

        AgentCommand::Clear => {
            harness.clear();
            CommandResponse::ok()
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
