//! Subcommand implementations.

use crate::Command;
use crate::term::StdinConfirmation;
use anyhow::{Result, bail};
use quillform_application::{
    AssessmentSession, AutoConfirm, CatalogEditor, ConfirmationPort, EditOutcome, SubmitOutcome,
};
use quillform_domain::{
    FormQuestion, InstanceId, QuestionDefinition, QuestionId, QuestionType, RecordId,
    ResponseValue, TemplateId,
};
use quillform_infrastructure::{FileConfig, InMemoryBackend, TracingNotifier};
use std::sync::Arc;

/// Everything a subcommand needs, wired in `main`.
pub struct AppContext {
    backend: Arc<InMemoryBackend>,
    record: RecordId,
    object_api_name: String,
    template_field: String,
    auto_confirm: bool,
}

impl AppContext {
    pub fn new(
        backend: Arc<InMemoryBackend>,
        record_id: String,
        config: &FileConfig,
        auto_confirm: bool,
    ) -> Self {
        Self {
            backend,
            record: RecordId::new(record_id),
            object_api_name: config.object_api_name.clone(),
            template_field: config.template_field.clone(),
            auto_confirm,
        }
    }

    fn session(&self) -> AssessmentSession {
        AssessmentSession::new(
            self.backend.clone(),
            Arc::new(TracingNotifier),
            self.record.clone(),
            self.object_api_name.clone(),
        )
    }

    fn editor(&self, template: TemplateId) -> CatalogEditor {
        let confirmation: Arc<dyn ConfirmationPort> = if self.auto_confirm {
            Arc::new(AutoConfirm)
        } else {
            Arc::new(StdinConfirmation)
        };
        CatalogEditor::new(
            self.backend.clone(),
            Arc::new(TracingNotifier),
            confirmation,
            template,
        )
    }

    async fn resolve_template(&self) -> Result<TemplateId> {
        let mut session = self.session();
        match session.resolve_template(&self.template_field).await {
            Some(template) => Ok(template),
            None => bail!("No assessment template is associated with record {}.", self.record),
        }
    }
}

/// Execute one subcommand. Returns whether backend state was mutated.
pub async fn run(command: &Command, context: AppContext) -> Result<bool> {
    match command {
        Command::Questions => {
            let template = context.resolve_template().await?;
            let mut editor = context.editor(template);
            editor.load().await.map_err(|e| anyhow::anyhow!(e))?;
            for question in editor.questions() {
                print_catalog_row(question);
            }
            Ok(false)
        }
        Command::Add {
            text,
            question_type,
            required,
            options,
            default,
        } => {
            let template = context.resolve_template().await?;
            let mut editor = context.editor(template);
            editor.load().await.map_err(|e| anyhow::anyhow!(e))?;

            let mut session = editor.new_question();
            session.set_text(text.as_str());
            session.set_required(*required);
            session.change_type(QuestionType::from_label(question_type.clone()));
            for value in options {
                let identity = session.add_option();
                session.set_option_value(&identity, value.as_str());
                if default.as_deref() == Some(value.as_str()) {
                    session.set_default(&identity);
                }
            }

            finish_edit(editor.save(&session).await, "Question saved.")
        }
        Command::Delete { id } => {
            let template = context.resolve_template().await?;
            let mut editor = context.editor(template);
            editor.load().await.map_err(|e| anyhow::anyhow!(e))?;
            finish_edit(
                editor.delete(&QuestionId::new(id.clone())).await,
                "Question deleted.",
            )
        }
        Command::Reorder { from, to } => {
            let template = context.resolve_template().await?;
            let mut editor = context.editor(template);
            editor.load().await.map_err(|e| anyhow::anyhow!(e))?;
            let outcome = editor.move_question(*from, *to).await;
            for question in editor.questions() {
                print_catalog_row(question);
            }
            finish_edit(outcome, "Question order updated.")
        }
        Command::Instances => {
            let mut session = context.session();
            for instance in session.instances().await {
                println!(
                    "{}  {}  created {}",
                    instance.id,
                    instance.name,
                    instance.created_at.format("%Y-%m-%d %H:%M")
                );
            }
            Ok(false)
        }
        Command::NewInstance => {
            let mut session = context.session();
            match session.create_instance().await {
                Some(instance) => {
                    println!("Created instance {}", instance.id);
                    Ok(true)
                }
                None => bail!("Could not create an assessment instance."),
            }
        }
        Command::Show { instance } => {
            let mut session = context.session();
            session
                .select_instance(InstanceId::new(instance.clone()))
                .await;
            if session.questions().is_empty() {
                println!("No questions to show.");
            }
            for question in session.form() {
                print_form_question(&question);
            }
            Ok(false)
        }
        Command::Fill {
            instance,
            set,
            toggle,
            select,
            submit,
        } => {
            let mut session = context.session();
            session
                .select_instance(InstanceId::new(instance.clone()))
                .await;
            if let Some(error) = session.last_error() {
                bail!("Could not load instance: {error}");
            }

            for entry in set {
                let (question, value) = parse_assign(entry)?;
                session.set_scalar(&QuestionId::new(question), value);
            }
            for entry in toggle {
                let (question, value) = parse_assign(entry)?;
                let (option_value, checked) = match value.strip_suffix(":off") {
                    Some(option_value) => (option_value, false),
                    None => (value.as_str(), true),
                };
                session.toggle_option(&QuestionId::new(question), option_value, checked);
            }
            for entry in select {
                let (question, value) = parse_assign(entry)?;
                let values = value.split(',').map(str::to_string).collect();
                session.replace_selection(&QuestionId::new(question), values);
            }

            if !*submit {
                for question in session.form() {
                    print_form_question(&question);
                }
                return Ok(false);
            }

            match session.submit().await {
                SubmitOutcome::Saved => {
                    println!("Assessment submitted successfully.");
                    Ok(true)
                }
                SubmitOutcome::ValidationBlocked => {
                    bail!("Please complete all required fields.")
                }
                SubmitOutcome::Failed(message) => bail!("Submit failed: {message}"),
            }
        }
    }
}

fn finish_edit(outcome: EditOutcome, success: &str) -> Result<bool> {
    match outcome {
        EditOutcome::Saved => {
            println!("{success}");
            Ok(true)
        }
        EditOutcome::Declined => {
            println!("Cancelled.");
            Ok(false)
        }
        EditOutcome::ValidationBlocked => bail!("Please complete all required fields."),
        EditOutcome::Pending => bail!("Another catalog operation is still pending."),
        EditOutcome::Failed(message) => bail!("{message}"),
    }
}

fn parse_assign(entry: &str) -> Result<(String, String)> {
    match entry.split_once('=') {
        Some((question, value)) if !question.is_empty() => {
            Ok((question.to_string(), value.to_string()))
        }
        _ => bail!("Expected QUESTION=VALUE, got '{entry}'"),
    }
}

fn print_catalog_row(question: &QuestionDefinition) {
    let id = question
        .id
        .as_ref()
        .map_or("(unsaved)", |id| id.as_str());
    let required = if question.required { " (required)" } else { "" };
    println!(
        "{:>3}. [{id}] {} - {}{required}",
        question.sequence,
        question.text,
        question.question_type.label(),
    );
    for option in &question.options {
        let default = if option.default { " *default" } else { "" };
        let inactive = if option.active { "" } else { " (inactive)" };
        println!("       - {}{default}{inactive}", option.value);
    }
}

fn print_form_question(question: &FormQuestion) {
    let required = if question.definition.required { " *" } else { "" };
    println!(
        "{:>3}. {}{required} [{}]",
        question.definition.sequence,
        question.definition.text,
        question.definition.question_type.label(),
    );
    if question.carries_options {
        for option in &question.options {
            let mark = if option.selected { "x" } else { " " };
            println!("     [{mark}] {}", option.value);
        }
    } else {
        match &question.value {
            ResponseValue::Scalar(Some(value)) if !value.is_empty() => {
                println!("     = {value}");
            }
            _ => println!("     (unanswered)"),
        }
    }
}
