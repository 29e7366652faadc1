use super::actions::Action;
use crate::api::models::{AppSettings, Lead, ScheduleSettings, SequenceRequest, SmtpCredentials, TargetAudience};
use crate::api::ApiClient;
use crate::constants::{OAUTH_POLL_ATTEMPTS, OAUTH_POLL_INTERVAL_SECS};
use crate::utils::datetime;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<anyhow::Result<TaskResult>>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Terminal state of a background task, kept for bookkeeping; the interesting
/// payloads travel over the action channel
#[derive(Debug, Clone)]
pub enum TaskResult {
    Completed(String),
    Failed(String),
}

/// Owns every background API call and reports outcomes as actions
///
/// Each spawn method runs one backend operation on a tokio task and sends its
/// completion or failure action over the channel handed out by [`new`].
/// Nothing here blocks the event loop.
///
/// [`new`]: TaskManager::new
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Analyze a product description
    pub fn spawn_analysis(&mut self, api: ApiClient, description: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with("Analyze product".to_string(), async move {
            match api.analyze_product(&description).await {
                Ok(result) => {
                    let _ = action_sender.send(Action::AnalysisCompleted(result));
                    Ok(TaskResult::Completed("analysis finished".to_string()))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::AnalysisFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
            }
        })
    }

    /// Search for leads matching the analyzed audience
    pub fn spawn_lead_search(&mut self, api: ApiClient, audience: TargetAudience, count: u32) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with(format!("Find {count} leads"), async move {
            match api.find_leads(&audience, count).await {
                Ok(leads) => {
                    let summary = format!("loaded {} leads", leads.len());
                    let _ = action_sender.send(Action::LeadsLoaded(leads));
                    Ok(TaskResult::Completed(summary))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::LeadsFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
            }
        })
    }

    /// Personalize the template for the selected leads
    pub fn spawn_preview(&mut self, api: ApiClient, leads: Vec<Lead>, template: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with("Personalize preview".to_string(), async move {
            match api.personalize_messages(&leads, &template).await {
                Ok(previews) => {
                    let summary = format!("personalized {} messages", previews.len());
                    let _ = action_sender.send(Action::PreviewReady(previews));
                    Ok(TaskResult::Completed(summary))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::PreviewFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
            }
        })
    }

    /// Create an outreach sequence after verifying an account is connected
    ///
    /// The pre-check runs in the same task so the composer's busy flag covers
    /// both calls.
    pub fn spawn_sequence_submit(
        &mut self,
        api: ApiClient,
        leads: Vec<Lead>,
        subject: String,
        template: String,
    ) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with("Create sequence".to_string(), async move {
            match api.email_status().await {
                Ok(status) if !status.connected => {
                    let _ = action_sender.send(Action::SequenceRejected);
                    return Ok(TaskResult::Failed("no email account connected".to_string()));
                }
                Ok(_) => {}
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::SequenceFailed(message.clone()));
                    return Ok(TaskResult::Failed(message));
                }
            }

            let request = SequenceRequest {
                name: datetime::sequence_name_now(),
                subject,
                template,
                leads,
            };
            match api.create_sequence(&request).await {
                Ok(response) => {
                    if let Some(id) = &response.sequence_id {
                        log::info!("sequence created with id {id}");
                    }
                    let message = response
                        .message
                        .unwrap_or_else(|| format!("Sequence '{}' created", request.name));
                    let _ = action_sender.send(Action::SequenceCreated(message.clone()));
                    Ok(TaskResult::Completed(message))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::SequenceFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
            }
        })
    }

    /// Export leads on the backend
    pub fn spawn_export(&mut self, api: ApiClient, leads: Vec<Lead>, format: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with(format!("Export leads as {format}"), async move {
            match api.save_leads(&leads, &format).await {
                Ok(response) if response.success => {
                    let message = response
                        .path
                        .map(|path| format!("Exported to {path}"))
                        .or(response.message)
                        .unwrap_or_else(|| "Leads exported".to_string());
                    let _ = action_sender.send(Action::ExportCompleted(message.clone()));
                    Ok(TaskResult::Completed(message))
                }
                Ok(response) => {
                    let message = response.message.unwrap_or_else(|| "Export rejected".to_string());
                    let _ = action_sender.send(Action::ExportFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::ExportFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
            }
        })
    }

    /// One-shot email connection status check
    pub fn spawn_status_check(&mut self, api: ApiClient) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with("Check email status".to_string(), async move {
            match api.email_status().await {
                Ok(status) => {
                    let summary = if status.connected {
                        format!("connected as {}", status.email)
                    } else {
                        "not connected".to_string()
                    };
                    let _ = action_sender.send(Action::StatusLoaded(status));
                    Ok(TaskResult::Completed(summary))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::StatusFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
            }
        })
    }

    /// Poll the status endpoint until a browser OAuth flow completes
    ///
    /// Bounded so an abandoned browser tab cannot pin the connector in its
    /// connecting state forever.
    pub fn spawn_oauth_poll(&mut self, api: ApiClient) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with("Wait for browser sign-in".to_string(), async move {
            for _ in 0..OAUTH_POLL_ATTEMPTS {
                tokio::time::sleep(Duration::from_secs(OAUTH_POLL_INTERVAL_SECS)).await;
                match api.email_status().await {
                    Ok(status) if status.connected => {
                        let _ = action_sender.send(Action::StatusLoaded(status));
                        return Ok(TaskResult::Completed("browser sign-in finished".to_string()));
                    }
                    Ok(_) => {}
                    // The backend just served the OAuth page; errors here are
                    // usually it being busy exchanging tokens
                    Err(e) => log::warn!("status poll failed: {e}"),
                }
            }
            let _ = action_sender.send(Action::OauthExpired);
            Ok(TaskResult::Failed("browser sign-in timed out".to_string()))
        })
    }

    /// Connect an account with SMTP credentials
    pub fn spawn_smtp_connect(&mut self, api: ApiClient, credentials: SmtpCredentials) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with("Connect SMTP account".to_string(), async move {
            let fallback_email = credentials.email.clone();
            match api.connect_smtp(&credentials).await {
                Ok(response) if response.success => {
                    let email = if response.email.is_empty() {
                        fallback_email
                    } else {
                        response.email
                    };
                    let provider = if response.provider.is_empty() {
                        "smtp".to_string()
                    } else {
                        response.provider
                    };
                    let _ = action_sender.send(Action::Connected { email, provider });
                    Ok(TaskResult::Completed("SMTP account connected".to_string()))
                }
                Ok(_) => {
                    let message = "backend did not accept the credentials".to_string();
                    let _ = action_sender.send(Action::ConnectFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::ConnectFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
            }
        })
    }

    /// Persist schedule settings for the connected account
    pub fn spawn_schedule_save(&mut self, api: ApiClient, settings: ScheduleSettings) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with("Save email settings".to_string(), async move {
            match api.update_email_settings(&settings).await {
                Ok(()) => {
                    let _ = action_sender.send(Action::ScheduleSaved);
                    Ok(TaskResult::Completed("email settings saved".to_string()))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::ScheduleSaveFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
            }
        })
    }

    /// Disconnect the connected email account
    pub fn spawn_disconnect(&mut self, api: ApiClient) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with("Disconnect email account".to_string(), async move {
            match api.disconnect_email().await {
                Ok(()) => {
                    let _ = action_sender.send(Action::Disconnected);
                    Ok(TaskResult::Completed("email account disconnected".to_string()))
                }
                Err(e) => {
                    let message = e.to_string();
                    let _ = action_sender.send(Action::DisconnectFailed(message.clone()));
                    Ok(TaskResult::Failed(message))
                }
            }
        })
    }

    /// Best-effort fetch of backend app settings; failures only get logged
    pub fn spawn_app_settings_load(&mut self, api: ApiClient) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.spawn_with("Load app settings".to_string(), async move {
            match api.app_settings().await {
                Ok(settings) => {
                    let _ = action_sender.send(Action::AppSettingsLoaded(settings));
                    Ok(TaskResult::Completed("app settings loaded".to_string()))
                }
                Err(e) => {
                    // Local defaults stay in effect
                    log::warn!("failed to load app settings: {e}");
                    Ok(TaskResult::Failed(e.to_string()))
                }
            }
        })
    }

    /// Best-effort persist of app settings; failures only get logged
    pub fn spawn_app_settings_save(&mut self, api: ApiClient, settings: AppSettings) -> TaskId {
        self.spawn_with("Save app settings".to_string(), async move {
            match api.update_app_settings(&settings).await {
                Ok(()) => Ok(TaskResult::Completed("app settings saved".to_string())),
                Err(e) => {
                    log::warn!("failed to save app settings: {e}");
                    Ok(TaskResult::Failed(e.to_string()))
                }
            }
        })
    }

    fn spawn_with<Fut>(&mut self, description: String, future: Fut) -> TaskId
    where
        Fut: Future<Output = anyhow::Result<TaskResult>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let task = BackgroundTask {
            id: task_id,
            handle: tokio::spawn(future),
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| {
                // Results already travelled over the action channel
                self.tasks.remove(&task_id).map(|task| {
                    log::debug!("task '{}' finished after {:?}", task.description, task.started_at.elapsed());
                    (task.id, task.description)
                })
            })
            .collect()
    }

    /// Abort one task, e.g. an OAuth wait the user cancelled
    pub fn abort_task(&mut self, task_id: TaskId) {
        if let Some(task) = self.tasks.remove(&task_id) {
            task.handle.abort();
        }
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
