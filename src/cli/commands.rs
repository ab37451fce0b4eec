//! Command handlers: translate parsed arguments into form commands and
//! service calls, then print the result.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::Shell;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::application::services::GeneratedProfile;
use crate::application::ApplicationError;
use crate::cli::args::{AddEntry, Cli, Commands, ConfigCommands, FormCommands, SchemaArg};
use crate::cli::output::{self, TerminalSurface};
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path};
use crate::domain::{
    build_payload, find_domain, CommandEffect, DiplomaEntry, DomainError, EntryKind,
    ExperienceEntry, FormCommand, FormField, FormState, NewEntry, PastCourseEntry, PayloadSchema,
    SubmitOutcome,
};
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;

/// Run the parsed command; returns the process exit code.
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<i32> {
    match &cli.command {
        Some(Commands::Form { command }) => form(command, container).map(|()| exitcode::OK),
        Some(Commands::Random {
            seed,
            domain,
            out,
            force,
        }) => random(*seed, domain.as_deref(), out.as_deref(), *force, container)
            .map(|()| exitcode::OK),
        Some(Commands::Payload {
            file,
            schema,
            compact,
        }) => payload(file, *schema, *compact, container).map(|()| exitcode::OK),
        Some(Commands::Predict {
            file,
            random,
            seed,
            schema,
            url,
        }) => predict(
            file.as_deref(),
            *random,
            *seed,
            *schema,
            url.as_deref(),
            container,
        ),
        Some(Commands::Config { command }) => config(command, cli, container).map(|()| exitcode::OK),
        Some(Commands::Completion { shell }) => {
            completion(*shell, &mut io::stdout());
            Ok(exitcode::OK)
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| CliError::Usage(e.to_string()))?;
            Ok(exitcode::OK)
        }
    }
}

fn form(command: &FormCommands, container: &ServiceContainer) -> CliResult<()> {
    let service = container.form_service();
    match command {
        FormCommands::Init { file, force } => {
            service.init(file, *force)?;
            output::success(&format!("Created form {}", file.display()));
        }
        FormCommands::Show { file } => {
            let state = service.load(file)?;
            print_form(&state);
        }
        FormCommands::Set {
            file,
            first_name,
            last_name,
            city,
            description,
            course_title,
            course_description,
        } => {
            let commands: Vec<FormCommand> = [
                (FormField::FirstName, first_name),
                (FormField::LastName, last_name),
                (FormField::City, city),
                (FormField::Description, description),
                (FormField::CourseTitle, course_title),
                (FormField::CourseDescription, course_description),
            ]
            .into_iter()
            .filter_map(|(field, value)| {
                value
                    .clone()
                    .map(|value| FormCommand::SetField(field, value))
            })
            .collect();
            if commands.is_empty() {
                return Err(CliError::InvalidArgs("no field to set".to_string()));
            }
            let effects = service.apply_all(file, commands)?;
            output::success(&format!(
                "Updated {} field(s) in {}",
                effects.len(),
                file.display()
            ));
        }
        FormCommands::Add { file, entry } => {
            let entry = new_entry(entry)?;
            let kind = entry.kind();
            service.apply(file, FormCommand::AddEntry(entry))?;
            output::success(&format!("Added {} to {}", kind, file.display()));
        }
        FormCommands::Remove {
            file,
            kind,
            position,
        } => {
            let kind = EntryKind::from(*kind);
            match service.remove_at(file, kind, *position)? {
                CommandEffect::Removed(_) => output::success(&format!(
                    "Removed {} #{} from {}",
                    kind,
                    position,
                    file.display()
                )),
                other => debug!("remove: unexpected effect {:?}", other),
            }
        }
    }
    Ok(())
}

/// Build an entry from CLI flags; missing flags take the kind's defaults.
fn new_entry(entry: &AddEntry) -> CliResult<NewEntry> {
    let entry = match entry {
        AddEntry::Diploma { title, level } => {
            let default = DiplomaEntry::default();
            NewEntry::Diploma(DiplomaEntry::new(
                title.clone().unwrap_or(default.title),
                level.clone().unwrap_or(default.level),
            ))
        }
        AddEntry::Experience {
            title,
            company,
            description,
            duration,
        } => {
            let default = ExperienceEntry::default();
            NewEntry::Experience(ExperienceEntry {
                title: title.clone().unwrap_or(default.title),
                company: company.clone().unwrap_or(default.company),
                description: description.clone(),
                duration: duration.clone(),
            })
        }
        AddEntry::PastCourse {
            title,
            description,
            stars,
        } => {
            let default = PastCourseEntry::default();
            let mut course = PastCourseEntry::new(
                title.clone().unwrap_or(default.title),
                stars.unwrap_or(default.number_of_stars),
            )?;
            course.description = description.clone();
            NewEntry::PastCourse(course)
        }
    };
    Ok(entry)
}

#[instrument(skip(container))]
fn random(
    seed: Option<u64>,
    domain: Option<&str>,
    out: Option<&Path>,
    force: bool,
    container: &ServiceContainer,
) -> CliResult<()> {
    let GeneratedProfile { state, report } = generate_profile(seed, domain, container)?;
    output::action("Random", &report);

    match out {
        Some(path) => {
            container.form_service().create(path, &state, force)?;
            output::success(&format!("Saved form {}", path.display()));
        }
        None => output::info(&crate::application::services::render_form(&state)?),
    }
    Ok(())
}

fn generate_profile(
    seed: Option<u64>,
    domain: Option<&str>,
    container: &ServiceContainer,
) -> CliResult<GeneratedProfile> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generator = container.generator();
    match domain {
        Some(name) => {
            let domain =
                find_domain(name).ok_or_else(|| DomainError::UnknownDomain(name.to_string()))?;
            Ok(generator.generate_for(domain, &mut rng))
        }
        None => generator
            .generate(&mut rng)
            .ok_or_else(|| CliError::Usage("no subject domain available".to_string())),
    }
}

#[instrument(skip(container))]
fn payload(
    file: &Path,
    schema: Option<SchemaArg>,
    compact: bool,
    container: &ServiceContainer,
) -> CliResult<()> {
    let state = container.form_service().load(file)?;
    let schema = schema
        .map(PayloadSchema::from)
        .unwrap_or(container.settings.schema);
    let payload = build_payload(&state, schema);
    let json = if compact {
        payload.to_json()
    } else {
        payload.to_json_pretty()
    }
    .map_err(|e| ApplicationError::OperationFailed {
        context: "serialize payload".to_string(),
        source: Box::new(e),
    })?;
    output::info(&json);
    Ok(())
}

#[instrument(skip(container))]
fn predict(
    file: Option<&Path>,
    random: bool,
    seed: Option<u64>,
    schema: Option<SchemaArg>,
    url: Option<&str>,
    container: &ServiceContainer,
) -> CliResult<i32> {
    let state = match file {
        Some(path) if !random => container.form_service().load(path)?,
        _ => {
            let GeneratedProfile { state, report } = generate_profile(seed, None, container)?;
            output::action("Random", &report);
            state
        }
    };

    let mut pipeline = container.submit_pipeline(schema.map(PayloadSchema::from), url);
    debug!(
        "predict: endpoint={} schema={}",
        pipeline.endpoint(),
        pipeline.schema()
    );
    let outcome = pipeline.submit(&state, &mut TerminalSurface::default());

    Ok(outcome_exit_code(&outcome))
}

/// Exit code after a rendered prediction outcome.
fn outcome_exit_code(outcome: &SubmitOutcome) -> i32 {
    match outcome {
        SubmitOutcome::Success { .. } => exitcode::OK,
        SubmitOutcome::NetworkError { .. } => exitcode::UNAVAILABLE,
        SubmitOutcome::ApiError { .. } | SubmitOutcome::UnexpectedResponse { .. } => {
            exitcode::SOFTWARE
        }
    }
}

fn config(command: &ConfigCommands, cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Path => {
            let local_dir = cli.project_dir.clone().unwrap_or_else(|| PathBuf::from("."));
            match global_config_path() {
                Some(path) => output::action("global", &path_status(&path)),
                None => output::action("global", &"(no config directory)"),
            }
            output::action("local", &path_status(&local_config_path(&local_dir)));
        }
    }
    Ok(())
}

fn path_status(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found)", path.display())
    }
}

fn completion(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

fn print_form(state: &FormState) {
    output::header("Profil");
    output::detail(&format!("Prénom      : {}", state.first_name));
    output::detail(&format!("Nom         : {}", state.last_name));
    output::detail(&format!("Ville       : {}", state.city));
    output::detail(&format!("Description : {}", state.description));

    output::header(&format!("Diplômes ({})", state.diplomas.len()));
    for (i, diploma) in state.diplomas.iter().enumerate() {
        output::item(i + 1, &format!("{} [{}]", diploma.title, diploma.level));
    }

    output::header(&format!("Expériences ({})", state.experiences.len()));
    for (i, experience) in state.experiences.iter().enumerate() {
        let mut line = format!("{} @ {}", experience.title, experience.company);
        if let Some(duration) = &experience.duration {
            line.push_str(&format!(", {duration}"));
        }
        output::item(i + 1, &line);
        if let Some(description) = &experience.description {
            output::detail(&format!("   {description}"));
        }
    }

    output::header(&format!("Cours passés ({})", state.past_courses.len()));
    for (i, course) in state.past_courses.iter().enumerate() {
        output::item(
            i + 1,
            &format!("{} ({:.1} ★)", course.title, course.number_of_stars),
        );
    }

    output::header("Cours à prédire");
    output::detail(&format!("Titre       : {}", state.course.title));
    output::detail(&format!("Description : {}", state.course.description));
}
