//! Command surface of the admin console binary
//!
//! Every command builds the page it needs, runs one action through it,
//! and prints the resulting toasts. Mutations land in the action log
//! with the signed-in operator attached.

use crate::audit::ActionLog;
use crate::config::Args;
use crate::layout;
use crate::list::{ListState, Searchable};
use crate::notify::{NoticeLevel, Notifier};
use crate::pages::{
    ActivitiesPage, AnnouncementsPage, ArticlesPage, FormsPage, KnowledgePage, LinksPage,
    MessagesPage, PageError, PageVisitsPage, PopupManager, RegulationsPage, SectionsPage,
    SecurityPage, SocketsPage, TrainingsPage, UsersPage, VisitsPage,
};
use crate::session::Session;
use crate::tour::TourGuide;
use atrium_client::{
    ActivityInput, AnnouncementInput, ApiClient, ArticleInput, FilePart, KnowledgeInput, LinkInput,
    Role, SectionInput, SecurityPostInput, UserInput,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Atrium admin console
#[derive(Parser, Debug)]
#[command(name = "atrium-console")]
#[command(about = "Administrative console for the Atrium intranet")]
pub struct Cli {
    #[command(flatten)]
    pub args: Args,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Content counts and recent sign-ins at a glance
    Overview,
    /// News articles
    Articles {
        #[command(subcommand)]
        action: ArticlesAction,
    },
    /// Company announcements
    Announcements {
        #[command(subcommand)]
        action: AnnouncementsAction,
    },
    /// Company activities and events
    Activities {
        #[command(subcommand)]
        action: ActivitiesAction,
    },
    /// IT knowledge base
    Knowledge {
        #[command(subcommand)]
        action: KnowledgeAction,
    },
    /// Security bulletins
    Security {
        #[command(subcommand)]
        action: SecurityAction,
    },
    /// Portal landing sections
    Sections {
        #[command(subcommand)]
        action: SectionsAction,
    },
    /// Portal quick links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },
    /// Downloadable form templates
    Forms {
        #[command(subcommand)]
        action: FormsAction,
    },
    /// Company regulations
    Regulations {
        #[command(subcommand)]
        action: RegulationsAction,
    },
    /// Training courses
    Trainings {
        #[command(subcommand)]
        action: TrainingsAction,
    },
    /// User accounts
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Server-side logs
    Logs {
        #[command(subcommand)]
        action: LogsAction,
    },
    /// Popup carousel images
    Popup {
        #[command(subcommand)]
        action: PopupAction,
    },
    /// Change the signed-in account's password
    Passwd {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
    /// Walk the guided tour for the areas your role opens
    Tour,
}

#[derive(Subcommand, Debug)]
pub enum ArticlesAction {
    /// List articles, filtered and paged
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Publish a new article
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        /// Repeatable tag flag
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Replace an article's title, body, and tags
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Delete an article
    Remove {
        #[arg(long)]
        id: String,
        /// Confirm the delete; without this flag nothing is sent
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AnnouncementsAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Post an announcement, optionally with a PDF attachment
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        attach: Option<PathBuf>,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ActivitiesAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Create an activity, optionally with a cover image
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        location: Option<String>,
        /// RFC 3339 start time, e.g. 2026-09-01T09:00:00Z
        #[arg(long)]
        starts_at: Option<String>,
        #[arg(long)]
        cover: Option<PathBuf>,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum KnowledgeAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        category: Option<String>,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SecurityAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        severity: Option<String>,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SectionsAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LinksAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    Add {
        #[arg(long)]
        label: String,
        #[arg(long)]
        url: String,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum FormsAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Upload a PDF and publish it as a form template
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        file: PathBuf,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RegulationsAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Upload a PDF and publish it as a regulation
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        file: PathBuf,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TrainingsAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Upload a video and publish it as a training course
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        video: PathBuf,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        department: Option<String>,
        #[arg(long, default_value = "staff")]
        role: Role,
        #[arg(long)]
        password: String,
    },
    /// Replace an account's details; omit --password to keep it
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        role: Role,
        #[arg(long)]
        password: Option<String>,
    },
    Remove {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogKind {
    Visits,
    PageVisits,
    Sockets,
    Messages,
}

#[derive(Subcommand, Debug)]
pub enum LogsAction {
    /// Sign-in visits
    Visits {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Per-page hit counters
    PageVisits {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Open realtime socket sessions
    Sockets {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Contact-box messages
    Messages {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Delete one record from a log
    Remove {
        #[arg(long)]
        kind: LogKind,
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PopupAction {
    /// Show the carousel in display order
    List,
    /// Upload one or more images
    Upload {
        files: Vec<PathBuf>,
    },
    /// Delete an image by its server path
    Remove {
        #[arg(long)]
        path: String,
        #[arg(long)]
        yes: bool,
    },
    /// Move an image to another slot and save the order.
    /// Slot numbers are as shown by `popup list`; the first slot is 1.
    Move {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
}

struct Ctx {
    client: Arc<ApiClient>,
    session: Session,
    notifier: Notifier,
    audit: ActionLog,
    page_size: usize,
    started: std::time::Instant,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { args, command } = self;

        let client = Arc::new(ApiClient::new(args.client_config()));
        let session = Session::new(client.clone());
        let notifier = Notifier::new();
        let audit = ActionLog::new();
        if let Some(path) = &args.audit_log {
            audit.init_file(path.clone()).await?;
        }

        if let Some((username, password)) = args.credentials() {
            let user = session.sign_in(&username, &password).await?;
            info!("Signed in as {} ({})", user.username, user.role);
        } else {
            warn!("No credentials configured; the backend will reject admin calls");
        }

        let ctx = Ctx {
            client,
            session,
            notifier,
            audit,
            page_size: args.page_size,
            started: std::time::Instant::now(),
        };

        let outcome = dispatch(&ctx, command).await;
        drain_toasts(&ctx.notifier).await;
        outcome.map_err(Into::into)
    }
}

async fn dispatch(ctx: &Ctx, command: Command) -> Result<(), PageError> {
    match command {
        Command::Overview => run_overview(ctx).await,
        Command::Articles { action } => run_articles(ctx, action).await,
        Command::Announcements { action } => run_announcements(ctx, action).await,
        Command::Activities { action } => run_activities(ctx, action).await,
        Command::Knowledge { action } => run_knowledge(ctx, action).await,
        Command::Security { action } => run_security(ctx, action).await,
        Command::Sections { action } => run_sections(ctx, action).await,
        Command::Links { action } => run_links(ctx, action).await,
        Command::Forms { action } => run_forms(ctx, action).await,
        Command::Regulations { action } => run_regulations(ctx, action).await,
        Command::Trainings { action } => run_trainings(ctx, action).await,
        Command::Users { action } => run_users(ctx, action).await,
        Command::Logs { action } => run_logs(ctx, action).await,
        Command::Popup { action } => run_popup(ctx, action).await,
        Command::Passwd { current, new } => run_passwd(ctx, &current, &new).await,
        Command::Tour => {
            run_tour(ctx);
            Ok(())
        }
    }
}

async fn run_overview(ctx: &Ctx) -> Result<(), PageError> {
    println!("{}", layout::rainbow("Atrium"));

    let articles = ctx.client.list_articles().await?;
    let announcements = ctx.client.list_announcements().await?;
    let knowledge = ctx.client.list_knowledge().await?;
    let bulletins = ctx.client.list_security_posts().await?;
    println!(
        "Content: {} articles, {} announcements, {} knowledge posts, {} bulletins",
        articles.len(),
        announcements.len(),
        knowledge.len(),
        bulletins.len()
    );

    let users = ctx.client.list_users().await?;
    println!("Accounts: {}", users.len());

    let visits = ctx.client.list_visits().await?;
    println!("Recent sign-ins:");
    for visit in visits.iter().take(5) {
        println!("  {} at {}", visit.username, visit.visited_at);
    }
    Ok(())
}

async fn run_articles(ctx: &Ctx, action: ArticlesAction) -> Result<(), PageError> {
    let mut page = ArticlesPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        ArticlesAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |a| {
                format!("[{}] {} ({})", a.id, a.title, a.tags.join(", "))
            });
            Ok(())
        }
        ArticlesAction::Publish { title, body, tag } => {
            let input = ArticleInput {
                title,
                body,
                tags: tag,
            };
            let result = page.create(input).await;
            record(ctx, "articles.create", None, &result).await;
            result
        }
        ArticlesAction::Update {
            id,
            title,
            body,
            tag,
        } => {
            let input = ArticleInput {
                title,
                body,
                tags: tag,
            };
            let result = page.update(&id, input).await;
            record(ctx, "articles.update", Some(&id), &result).await;
            result
        }
        ArticlesAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "articles.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_announcements(ctx: &Ctx, action: AnnouncementsAction) -> Result<(), PageError> {
    let mut page = AnnouncementsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        AnnouncementsAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |a| {
                let marker = if a.file_id.is_some() { " [attachment]" } else { "" };
                format!("[{}] {}{}", a.id, a.title, marker)
            });
            Ok(())
        }
        AnnouncementsAction::Post {
            title,
            body,
            attach,
        } => {
            let file_id = match attach {
                Some(path) => {
                    let part = part_from_path(&path)?;
                    let stored = page.upload_attachment(part).await?;
                    Some(stored.id)
                }
                None => None,
            };
            let input = AnnouncementInput {
                title,
                body,
                file_id,
            };
            let result = page.create(input).await;
            record(ctx, "announcements.create", None, &result).await;
            result
        }
        AnnouncementsAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "announcements.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_activities(ctx: &Ctx, action: ActivitiesAction) -> Result<(), PageError> {
    let mut page = ActivitiesPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        ActivitiesAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |a| {
                let when = a
                    .starts_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "unscheduled".to_string());
                format!("[{}] {} ({})", a.id, a.title, when)
            });
            Ok(())
        }
        ActivitiesAction::Add {
            title,
            description,
            location,
            starts_at,
            cover,
        } => {
            let starts_at = starts_at.map(|raw| parse_start_time(&raw)).transpose()?;
            let cover_id = match cover {
                Some(path) => {
                    let part = part_from_path(&path)?;
                    let stored = page.upload_cover(part).await?;
                    Some(stored.id)
                }
                None => None,
            };
            let input = ActivityInput {
                title,
                description,
                location,
                starts_at,
                cover_id,
            };
            let result = page.create(input).await;
            record(ctx, "activities.create", None, &result).await;
            result
        }
        ActivitiesAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "activities.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_knowledge(ctx: &Ctx, action: KnowledgeAction) -> Result<(), PageError> {
    let mut page = KnowledgePage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        KnowledgeAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |k| {
                let category = k.category.as_deref().unwrap_or("uncategorized");
                format!("[{}] {} ({})", k.id, k.title, category)
            });
            Ok(())
        }
        KnowledgeAction::Publish {
            title,
            body,
            category,
        } => {
            let input = KnowledgeInput {
                title,
                body,
                category,
            };
            let result = page.create(input).await;
            record(ctx, "knowledge.create", None, &result).await;
            result
        }
        KnowledgeAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "knowledge.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_security(ctx: &Ctx, action: SecurityAction) -> Result<(), PageError> {
    let mut page = SecurityPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        SecurityAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |s| {
                let severity = s.severity.as_deref().unwrap_or("advisory");
                format!("[{}] {} ({})", s.id, s.title, severity)
            });
            Ok(())
        }
        SecurityAction::Publish {
            title,
            body,
            severity,
        } => {
            let input = SecurityPostInput {
                title,
                body,
                severity,
            };
            let result = page.create(input).await;
            record(ctx, "security.create", None, &result).await;
            result
        }
        SecurityAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "security.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_sections(ctx: &Ctx, action: SectionsAction) -> Result<(), PageError> {
    let mut page = SectionsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        SectionsAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |s| format!("[{}] {}", s.id, s.title));
            Ok(())
        }
        SectionsAction::Add { title, body } => {
            let result = page.create(SectionInput { title, body }).await;
            record(ctx, "sections.create", None, &result).await;
            result
        }
        SectionsAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "sections.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_links(ctx: &Ctx, action: LinksAction) -> Result<(), PageError> {
    let mut page = LinksPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        LinksAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |l| {
                format!("[{}] {} -> {}", l.id, l.label, l.url)
            });
            Ok(())
        }
        LinksAction::Add { label, url } => {
            let result = page.create(LinkInput { label, url }).await;
            record(ctx, "links.create", None, &result).await;
            result
        }
        LinksAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "links.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_forms(ctx: &Ctx, action: FormsAction) -> Result<(), PageError> {
    let mut page = FormsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        FormsAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |f| format!("[{}] {}", f.id, f.title));
            Ok(())
        }
        FormsAction::Publish { title, file } => {
            let part = part_from_path(&file)?;
            let result = page.publish(&title, part).await;
            record(ctx, "forms.create", None, &result).await;
            result
        }
        FormsAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "forms.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_regulations(ctx: &Ctx, action: RegulationsAction) -> Result<(), PageError> {
    let mut page = RegulationsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        RegulationsAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |r| format!("[{}] {}", r.id, r.title));
            Ok(())
        }
        RegulationsAction::Publish { title, file } => {
            let part = part_from_path(&file)?;
            let result = page.publish(&title, part).await;
            record(ctx, "regulations.create", None, &result).await;
            result
        }
        RegulationsAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "regulations.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_trainings(ctx: &Ctx, action: TrainingsAction) -> Result<(), PageError> {
    let mut page = TrainingsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        TrainingsAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |t| format!("[{}] {}", t.id, t.title));
            Ok(())
        }
        TrainingsAction::Publish {
            title,
            description,
            video,
        } => {
            let part = part_from_path(&video)?;
            let result = page.publish(&title, description.as_deref(), part).await;
            record(ctx, "trainings.create", None, &result).await;
            result
        }
        TrainingsAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "trainings.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_users(ctx: &Ctx, action: UsersAction) -> Result<(), PageError> {
    let mut page = UsersPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
    page.load().await?;

    match action {
        UsersAction::List { query, page: n } => {
            show_list(&mut page.list, query, n, |u| {
                let department = u.department.as_deref().unwrap_or("-");
                format!("[{}] {} ({}, {})", u.id, u.username, u.role, department)
            });
            Ok(())
        }
        UsersAction::Add {
            username,
            name,
            department,
            role,
            password,
        } => {
            let input = UserInput {
                username,
                full_name: name,
                department,
                role,
                password: Some(password),
            };
            let result = page.create(input).await;
            record(ctx, "users.create", None, &result).await;
            result
        }
        UsersAction::Update {
            id,
            username,
            name,
            department,
            role,
            password,
        } => {
            let input = UserInput {
                username,
                full_name: name,
                department,
                role,
                password,
            };
            let result = page.update(&id, input).await;
            record(ctx, "users.update", Some(&id), &result).await;
            result
        }
        UsersAction::Remove { id, yes } => {
            let result = page.remove(&id, yes).await;
            record_removal(ctx, "users.delete", &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_logs(ctx: &Ctx, action: LogsAction) -> Result<(), PageError> {
    match action {
        LogsAction::Visits { query, page: n } => {
            let mut page = VisitsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
            page.load().await?;
            show_list(&mut page.list, query, n, |v| {
                let ip = v.ip.as_deref().unwrap_or("-");
                format!("[{}] {} from {} at {}", v.id, v.username, ip, v.visited_at)
            });
            Ok(())
        }
        LogsAction::PageVisits { query, page: n } => {
            let mut page =
                PageVisitsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
            page.load().await?;
            show_list(&mut page.list, query, n, |p| {
                format!("[{}] {} at {}", p.id, p.page, p.visited_at)
            });
            Ok(())
        }
        LogsAction::Sockets { query, page: n } => {
            let mut page =
                SocketsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
            page.load().await?;
            show_list(&mut page.list, query, n, |s| {
                format!("[{}] {} ({})", s.id, s.username, s.socket_id)
            });
            Ok(())
        }
        LogsAction::Messages { query, page: n } => {
            let mut page =
                MessagesPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
            page.load().await?;
            show_list(&mut page.list, query, n, |m| {
                format!("[{}] {}: {}", m.id, m.sender, m.body)
            });
            Ok(())
        }
        LogsAction::Remove { kind, id, yes } => {
            let (operation, result) = match kind {
                LogKind::Visits => {
                    let mut page =
                        VisitsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
                    page.load().await?;
                    ("logs.visits.delete", page.remove(&id, yes).await)
                }
                LogKind::PageVisits => {
                    let mut page = PageVisitsPage::new(
                        ctx.client.clone(),
                        ctx.notifier.clone(),
                        ctx.page_size,
                    );
                    page.load().await?;
                    ("logs.page_visits.delete", page.remove(&id, yes).await)
                }
                LogKind::Sockets => {
                    let mut page =
                        SocketsPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
                    page.load().await?;
                    ("logs.sockets.delete", page.remove(&id, yes).await)
                }
                LogKind::Messages => {
                    let mut page =
                        MessagesPage::new(ctx.client.clone(), ctx.notifier.clone(), ctx.page_size);
                    page.load().await?;
                    ("logs.messages.delete", page.remove(&id, yes).await)
                }
            };
            record_removal(ctx, operation, &id, yes, &result).await;
            result.map(|_| ())
        }
    }
}

async fn run_popup(ctx: &Ctx, action: PopupAction) -> Result<(), PageError> {
    let mut popup = PopupManager::new(ctx.client.clone(), ctx.notifier.clone());
    popup.load().await?;

    match action {
        PopupAction::List => {
            if popup.images().is_empty() {
                println!("The carousel is empty.");
            }
            for (slot, image) in popup.images().iter().enumerate() {
                println!("{:>3}. {}", slot + 1, image.path);
            }
            Ok(())
        }
        PopupAction::Upload { files } => {
            let mut parts = Vec::with_capacity(files.len());
            for file in &files {
                parts.push(part_from_path(file)?);
            }
            let result = popup.upload(parts).await;
            record(ctx, "popup.upload", None, &result).await;
            result
        }
        PopupAction::Remove { path, yes } => {
            let result = popup.remove(&path, yes).await;
            record_removal(ctx, "popup.delete", &path, yes, &result).await;
            result.map(|_| ())
        }
        PopupAction::Move { from, to } => {
            let from = from
                .checked_sub(1)
                .ok_or_else(|| PageError::Invalid("slot numbers start at 1".to_string()))?;
            let to = to
                .checked_sub(1)
                .ok_or_else(|| PageError::Invalid("slot numbers start at 1".to_string()))?;

            let result = popup.move_image(from, to).await;
            record(ctx, "popup.save_order", None, &result).await;

            for (slot, image) in popup.images().iter().enumerate() {
                println!("{:>3}. {}", slot + 1, image.path);
            }
            result
        }
    }
}

async fn run_passwd(ctx: &Ctx, current: &str, new: &str) -> Result<(), PageError> {
    let result = ctx
        .session
        .change_password(current, new)
        .await
        .map_err(PageError::from);

    match &result {
        Ok(()) => ctx.notifier.success("Password changed").await,
        Err(PageError::Api(e)) => {
            ctx.notifier
                .error(crate::pages::failure_text("Change password", e))
                .await
        }
        Err(_) => {}
    }
    record(ctx, "auth.change_password", None, &result).await;
    result
}

fn run_tour(ctx: &Ctx) {
    let guide = TourGuide::new();
    for area in ctx.session.areas() {
        for item in layout::area_menu(area) {
            guide.register(
                item.slug,
                item.label,
                format!("Manage {} from here.", item.label.to_lowercase()),
            );
        }
    }

    if guide.stop_count() == 0 {
        println!("Sign in with an admin role to take the tour.");
        return;
    }

    guide.start();
    while let Some(stop) = guide.current_stop() {
        println!(
            "[{}/{}] {}: {}",
            guide.state().current + 1,
            guide.stop_count(),
            stop.title,
            stop.hint
        );
        if guide.at_last_stop() {
            guide.finish();
        } else {
            guide.next();
        }
    }
    println!("Tour finished.");
}

// ==================== Helpers ====================

/// Render one page of a list: filter, jump, print, footer
fn show_list<T: Searchable>(
    list: &mut ListState<T>,
    query: Option<String>,
    page: usize,
    describe: impl Fn(&T) -> String,
) {
    if let Some(query) = query {
        list.set_query(query);
    }
    list.pager.jump(page);

    if list.no_results() {
        println!("No results for '{}'", list.query());
        return;
    }

    let offset = (list.pager.current_page() - 1) * list.pager.page_size();
    for (i, row) in list.visible().iter().enumerate() {
        println!("{:>3}. {}", offset + i + 1, describe(row));
    }
    println!(
        "Page {} of {} ({} items)",
        list.pager.current_page(),
        list.pager.total_pages(),
        list.pager.total_items()
    );
}

/// Stage a local file for upload, guessing the MIME type from the
/// extension
fn part_from_path(path: &Path) -> Result<FilePart, PageError> {
    let bytes = std::fs::read(path)
        .map_err(|e| PageError::Invalid(format!("cannot read {}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload.bin".to_string());

    let mime = match path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };

    Ok(FilePart::new(file_name, mime, bytes))
}

fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, PageError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| PageError::Invalid(format!("invalid start time '{}': {}", raw, e)))
}

/// Audit one mutation with the signed-in operator attached
async fn record<T>(ctx: &Ctx, operation: &str, target: Option<&str>, result: &Result<T, PageError>) {
    let operator = ctx.session.current_user().map(|u| u.username);
    let duration_ms = ctx.started.elapsed().as_millis() as u64;
    match result {
        Ok(_) => {
            ctx.audit
                .log_success(operator.as_deref(), operation, target, duration_ms)
                .await
        }
        Err(e) => {
            ctx.audit
                .log_failure(operator.as_deref(), operation, target, duration_ms, &e.to_string())
                .await
        }
    }
}

/// Audit a delete, skipping unconfirmed no-ops
async fn record_removal(
    ctx: &Ctx,
    operation: &str,
    target: &str,
    confirmed: bool,
    result: &Result<bool, PageError>,
) {
    if !confirmed {
        println!("Not deleting {} (pass --yes to confirm)", target);
        return;
    }
    record(ctx, operation, Some(target), result).await;
}

async fn drain_toasts(notifier: &Notifier) {
    let mut toasts = notifier.active().await;
    toasts.reverse();
    for toast in toasts {
        match toast.level {
            NoticeLevel::Success => println!("ok: {}", toast.message),
            NoticeLevel::Error => println!("error: {}", toast.message),
        }
    }
}
