//! Interactive sessions over stdin.
//!
//! A current-thread tokio runtime multiplexes a wall-clock ticker, which
//! feeds elapsed time into the session timers, with line commands read
//! from stdin. EOF behaves like `q`.

use std::time::Duration;

use clap::Args;
use mindforge_core::events::Event;
use mindforge_core::flow::{next_day_available, Action, App, Screen};
use mindforge_core::i18n::{Language, Translator};
use mindforge_core::program::day_label;
use mindforge_core::session::{format_clock, DigitOutcome, DrillPhase};
use mindforge_core::storage::{Database, KvStore};
use mindforge_core::Config;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{Instant, MissedTickBehavior};

use super::day::print_overview;
use super::CmdResult;

const TICK: Duration = Duration::from_millis(100);

#[derive(Args)]
pub struct SessionArgs {
    /// Day to run (1-37)
    pub day: u8,
    /// Print session events as JSON lines
    #[arg(long)]
    pub json: bool,
}

type Input = Lines<BufReader<Stdin>>;

fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()
}

fn open_app() -> Result<App<Database>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    Ok(App::open(db, config.session))
}

/// `mindforge session <day>`
pub fn run(args: SessionArgs) -> CmdResult {
    let mut app = open_app()?;
    if app.screen() == Screen::LanguageSelect {
        return Err("no language chosen yet; run `mindforge language set <code>`".into());
    }
    app.dispatch(Action::Continue);
    if app.dispatch(Action::SelectDay(args.day)) != (Screen::Overview { day: args.day }) {
        let max = app.progress().max_selectable_day();
        return Err(format!("day {} is not selectable (1-{})", day_label(args.day), max).into());
    }
    app.dispatch(Action::StartSession);

    let out = Output { json: args.json };
    runtime()?.block_on(async {
        let mut input = BufReader::new(tokio::io::stdin()).lines();
        drive_session(&mut app, &mut input, out).await
    })?;

    if let Screen::Complete { day } = app.screen() {
        out.completed(app.translator(), day, app.progress().streak);
    }
    Ok(())
}

/// `mindforge run`
pub fn run_app() -> CmdResult {
    let mut app = open_app()?;
    let out = Output { json: false };
    runtime()?.block_on(async {
        let mut input = BufReader::new(tokio::io::stdin()).lines();
        drive_app(&mut app, &mut input, out).await
    })
}

async fn drive_app<K: KvStore>(app: &mut App<K>, input: &mut Input, out: Output) -> CmdResult {
    loop {
        prompt(app);
        if let Screen::Session { .. } = app.screen() {
            drive_session(app, input, out).await?;
            if let Screen::Complete { day } = app.screen() {
                out.completed(app.translator(), day, app.progress().streak);
            }
            continue;
        }

        let Some(line) = input.next_line().await? else {
            return Ok(());
        };
        let line = line.trim();
        if line == "quit" {
            return Ok(());
        }
        match parse_screen_command(app, line) {
            Some(action) => {
                app.dispatch(action);
            }
            None => eprintln!("?"),
        }
    }
}

fn prompt<K: KvStore>(app: &App<K>) {
    let t = app.translator();
    match app.screen() {
        Screen::LanguageSelect => {
            println!("Select Your Language");
            for language in Language::ALL {
                println!("  {}  {} {}", language.code(), language.flag(), language.native_name());
            }
        }
        Screen::Welcome => {
            println!("{}", t.t("welcomeTitle"));
            println!("{}", t.t("welcomeSubtitle"));
            println!("[c] {}  [quit]", t.t("getStarted"));
        }
        Screen::DaySelect => {
            let picker = app.day_picker();
            println!("{}", t.t("whichDay"));
            println!("1-{} [{}]", day_label(picker.max()), day_label(picker.day()));
        }
        Screen::Overview { .. } => {
            if let Some(program) = app.program_day() {
                print_overview(t, &program);
            }
            println!(
                "[s] {}  [a] {}  [h] {}",
                t.t("startSession"),
                t.t("chooseAnotherDay"),
                t.t("backToHome")
            );
        }
        Screen::Complete { day } => {
            if next_day_available(day) {
                print!("[n] {}  ", t.t("nextDay"));
            }
            println!("[h] {}", t.t("backToHome"));
        }
        Screen::Session { .. } => {}
    }
}

/// Map a line typed on a non-session screen to an action.
fn parse_screen_command<K: KvStore>(app: &App<K>, line: &str) -> Option<Action> {
    if let Some(code) = line.strip_prefix("lang ") {
        return code.parse().ok().map(Action::ChangeLanguage);
    }
    if line == "reset" {
        return Some(Action::ResetProgress);
    }
    match app.screen() {
        Screen::LanguageSelect => line.parse().ok().map(Action::ChooseLanguage),
        Screen::Welcome => (line == "c").then_some(Action::Continue),
        Screen::DaySelect if line.is_empty() => Some(app.day_picker().confirm()),
        Screen::DaySelect => parse_day(line).map(Action::SelectDay),
        Screen::Overview { .. } => match line {
            "s" => Some(Action::StartSession),
            "a" => Some(Action::ChooseAnother),
            "h" => Some(Action::Home),
            _ => None,
        },
        Screen::Complete { .. } => match line {
            "n" => Some(Action::NextDay),
            "h" => Some(Action::Home),
            _ => None,
        },
        Screen::Session { .. } => None,
    }
}

/// Accepts `12` as well as the maintenance labels `M1`..`M7`.
fn parse_day(text: &str) -> Option<u8> {
    match text.strip_prefix(|c: char| c == 'M' || c == 'm') {
        Some(rest) => rest.parse::<u8>().ok().filter(|n| (1..=7).contains(n)).map(|n| n + 30),
        None => text.parse().ok(),
    }
}

/// Run the session screen until it completes or is exited.
async fn drive_session<K: KvStore>(app: &mut App<K>, input: &mut Input, out: Output) -> CmdResult {
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();
    let events = app.drain_events();
    out.events(app.translator(), events);

    while let Screen::Session { .. } = app.screen() {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                let elapsed = u64::try_from(now.duration_since(last).as_millis()).unwrap_or(u64::MAX);
                last = now;
                app.elapse(elapsed);
            }
            line = input.next_line() => {
                match line? {
                    Some(line) => session_command(app, line.trim()),
                    None => {
                        app.dispatch(Action::Exit);
                    }
                }
            }
        }
        let events = app.drain_events();
        out.events(app.translator(), events);
    }
    Ok(())
}

fn session_command<K: KvStore>(app: &mut App<K>, line: &str) {
    match line {
        "p" => app.toggle_pause(),
        "n" => {
            app.advance();
        }
        "q" => {
            app.dispatch(Action::Exit);
        }
        "" => {}
        other => match other.parse::<u8>() {
            Ok(digit) => match app.input_digit(digit) {
                Ok(DigitOutcome::Ignored) => tracing::debug!(digit, "digit ignored"),
                Ok(_) => {}
                Err(e) => eprintln!("{e}"),
            },
            Err(_) => eprintln!("?"),
        },
    }
}

#[derive(Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn events(self, t: &Translator, events: Vec<Event>) {
        for event in events {
            if self.json {
                match serde_json::to_string(&event) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!("could not encode event: {e}"),
                }
            } else if let Some(line) = describe(t, &event) {
                println!("{line}");
            }
        }
    }

    fn completed(self, t: &Translator, day: u8, streak: u32) {
        if self.json {
            return;
        }
        println!("{}", t.t("sessionComplete"));
        let label = day_label(day);
        println!("{}", t.translate("dayCompleted", &[("day", label.as_str())]));
        println!("{}: {streak}", t.t("currentStreak"));
    }
}

fn describe(t: &Translator, event: &Event) -> Option<String> {
    let line = match event {
        Event::StepStarted {
            step_index,
            step_type,
            duration_secs,
            ..
        } => format!(
            "== {} {} - {} ({}) - {}",
            t.t("step"),
            step_index + 1,
            t.t(step_type.label_key()),
            format_clock(*duration_secs),
            t.t(step_type.description_key()),
        ),
        Event::Paused { remaining_secs, .. } => {
            format!("|| {} {}", t.t("pause"), format_clock(*remaining_secs))
        }
        Event::Resumed { remaining_secs, .. } => {
            format!("> {} {}", t.t("resume"), format_clock(*remaining_secs))
        }
        Event::CountdownFinished { .. } => format!("0:00 [n] {}", t.t("next")),
        Event::BreathPhaseChanged { phase, .. } => format!("  ~ {}", t.t(phase.label_key())),
        Event::DigitRevealed { digit, .. } => format!("  {digit}"),
        Event::DrillPhaseChanged { phase, .. } => match phase {
            DrillPhase::Show { .. } => format!("  {}", t.t("rememberSequence")),
            DrillPhase::Input => format!("  {} (1-9)", t.t("recallSequence")),
            DrillPhase::Result { .. } => return None,
        },
        Event::DrillJudged { correct: true, .. } => format!("  {}", t.t("correct")),
        Event::DrillJudged {
            correct: false,
            sequence,
            ..
        } => format!("  {} ({sequence:?})", t.t("tryAgain")),
        Event::SessionStarted { .. } | Event::SessionCompleted { .. } | Event::SessionExited { .. } => {
            return None
        }
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_main_and_maintenance_days() {
        assert_eq!(parse_day("12"), Some(12));
        assert_eq!(parse_day("M1"), Some(31));
        assert_eq!(parse_day("m7"), Some(37));
        assert_eq!(parse_day("M8"), None);
        assert_eq!(parse_day("x"), None);
    }

    #[test]
    fn describes_drill_feedback() {
        let t = Translator::new(Some(Language::En));
        let judged = Event::DrillJudged {
            correct: true,
            sequence: vec![1, 2, 3, 4],
            input: vec![1, 2, 3, 4],
            at: chrono::Utc::now(),
        };
        assert_eq!(describe(&t, &judged).as_deref(), Some("  Correct!"));
    }
}
