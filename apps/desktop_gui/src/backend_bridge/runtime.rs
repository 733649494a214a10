//! Worker thread that owns the `StudentClient` and runs queued commands one at a time.

use std::thread;

use client_core::{ClientError, ClientSettings, StudentBackend, StudentClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::{BackendCommand, CommandKind};
use crate::controller::events::UiEvent;

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let client = match StudentClient::from_settings(&settings) {
                Ok(client) => client,
                Err(err) => {
                    tracing::error!(backend_url = %settings.backend_url, "cannot create student client: {err}");
                    let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                        "Cannot use backend address '{}': {err}",
                        settings.backend_url
                    )));
                    return;
                }
            };
            serve_commands(client, cmd_rx, ui_tx).await;
        });
    });
}

/// Fetches the list once, then runs commands in arrival order until the UI drops its sender.
/// A snapshot of the client state follows every command.
pub async fn serve_commands<B: StudentBackend>(
    mut client: StudentClient<B>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let _ = client.list().await;
    publish(
        &client,
        CommandReport {
            origin: CommandKind::Refresh,
            write_landed: false,
        },
        &ui_tx,
    );

    while let Ok(cmd) = cmd_rx.recv() {
        let report = apply_command(&mut client, cmd).await;
        publish(&client, report, &ui_tx);
    }
    tracing::debug!("ui command channel closed; backend worker exiting");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandReport {
    pub origin: CommandKind,
    /// The service accepted a create, update or delete. A failed follow-up refresh
    /// does not change this.
    pub write_landed: bool,
}

pub async fn apply_command<B: StudentBackend>(
    client: &mut StudentClient<B>,
    cmd: BackendCommand,
) -> CommandReport {
    let kind = cmd.kind();
    let outcome = match cmd {
        BackendCommand::Refresh => client.list().await,
        BackendCommand::Create { draft } => {
            client.set_form(draft);
            client.create().await
        }
        BackendCommand::Update { draft } => {
            client.set_form(draft);
            client.update().await
        }
        BackendCommand::Delete { roll_no } => client.delete(roll_no).await,
        BackendCommand::Search { roll_no } => {
            client.set_search_query(roll_no);
            client.search().await
        }
    };
    let writes = matches!(
        kind,
        CommandKind::Create | CommandKind::Update | CommandKind::Delete
    );
    let write_landed = writes && matches!(outcome, Ok(()) | Err(ClientError::Fetch(_)));
    if let Err(err) = outcome {
        tracing::debug!(command = kind.as_str(), "command finished with error: {err}");
    }
    CommandReport {
        origin: kind,
        write_landed,
    }
}

// The UI may already be gone; a failed send is dropped rather than retried.
fn publish<B: StudentBackend>(
    client: &StudentClient<B>,
    report: CommandReport,
    ui_tx: &Sender<UiEvent>,
) {
    let _ = ui_tx.try_send(UiEvent::StateChanged {
        state: client.state().clone(),
        origin: report.origin,
        write_landed: report.write_landed,
    });
}
