//! Headless demo of the pageflow navigation engine.
//!
//! Replays a scripted swipe session against the real runtime, logging every
//! navigation, then exercises the collaborator services the way the site's
//! header and contact page do. Pass `--fetch-stars` to hit the GitHub API
//! for the project listing.

use std::rc::Rc;
use std::thread;
use std::time::Duration;

use log::{info, warn};

use pageflow_foundation::{Point, PointerEvent, PointerEventKind};
use pageflow_nav::{Navigator, Pager, RouteTable};
use pageflow_runtime_std::StdRuntime;
use pageflow_services::{
    projects, BufferedClipboard, ClipboardWriter, GithubClient, InMemoryPersistence, Language,
    SystemClipboard, Theme, ThemeProvider, Translator,
};

const VIEWPORT_WIDTH: f32 = 1280.0;

struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        println!("-> navigated to {path}");
    }
}

/// Drains the runtime on wall-clock time until no deferred work remains.
fn pump_until_idle(runtime: &StdRuntime) {
    while runtime.needs_frame() {
        runtime.pump();
        thread::sleep(Duration::from_millis(4));
    }
}

fn drive_swipe(pager: &mut Pager, runtime: &StdRuntime, from_x: f32, to_x: f32) {
    pager.on_pointer_event(&PointerEvent::new(
        PointerEventKind::Down,
        Point::new(from_x, 0.0),
    ));
    let steps = 8;
    for step in 1..=steps {
        let fraction = step as f32 / steps as f32;
        let x = from_x + (to_x - from_x) * fraction;
        pager.on_pointer_event(&PointerEvent::new(PointerEventKind::Move, Point::new(x, 0.0)));
        runtime.pump();
    }
    pager.on_pointer_event(&PointerEvent::new(
        PointerEventKind::Up,
        Point::new(to_x, 0.0),
    ));
    pump_until_idle(runtime);
}

fn print_header(translator: &Translator) {
    println!(
        "[{}] {} | {} | {} | {}",
        translator.language().code(),
        translator.t("home"),
        translator.t("about"),
        translator.t("projects"),
        translator.t("contact"),
    );
}

fn fetch_stars() {
    let client = match GithubClient::new() {
        Ok(client) => client,
        Err(err) => {
            warn!("github client unavailable: {err}");
            return;
        }
    };
    for project in projects() {
        match client.fetch_repo(project.link) {
            Ok(info) => println!("  {}: {} stars", info.name, info.stars),
            // Inline fallback text; a fetch failure never disturbs navigation.
            Err(err) => println!("  {}: stars unavailable ({err})", project.title),
        }
    }
}

fn main() {
    env_logger::init();
    let want_stars = std::env::args().any(|arg| arg == "--fetch-stars");

    let runtime = StdRuntime::new();
    let routes = Rc::new(RouteTable::new(["/", "/about", "/project", "/contact"]));
    let mut pager = Pager::new(
        routes,
        runtime.runtime_handle(),
        Rc::new(ConsoleNavigator),
        VIEWPORT_WIDTH,
    );

    let translator = Translator::new(Language::EnUs);
    let theme = ThemeProvider::new(Rc::new(InMemoryPersistence::new()), None, Theme::System);

    print_header(&translator);
    println!("theme: {}", theme.resolved().as_str());

    // Swipe left through the whole table, one page at a time.
    info!("replaying swipe session");
    for _ in 0..3 {
        drive_swipe(&mut pager, &runtime, 900.0, 500.0);
        println!("   now at {}", pager.current_path());
    }

    // One more swipe left: last route, the gesture rubber-bands and settles.
    drive_swipe(&mut pager, &runtime, 900.0, 500.0);
    println!("   still at {}", pager.current_path());

    // Logo click: long jump home with a scaled duration.
    pager.navigate_home();
    if let Some(spec) = pager.transition_spec().get() {
        println!("   jump home over {}ms", spec.duration_millis);
    }
    pump_until_idle(&runtime);

    // Header toggles.
    translator.toggle_language();
    print_header(&translator);
    theme.toggle();
    println!("theme: {}", theme.resolved().as_str());

    // Contact page copy, falling back to the in-process buffer when the
    // host has no clipboard (CI, ssh sessions).
    let email = "p@yshsr.org";
    let clipboard: Box<dyn ClipboardWriter> = match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(err) => {
            warn!("{err}, using buffered clipboard");
            Box::new(BufferedClipboard::new())
        }
    };
    match clipboard.write(email) {
        Ok(()) => println!("{}: {email}", translator.t("copied_to_clipboard")),
        Err(err) => println!("{}: {err}", translator.t("copy_failed")),
    }

    println!("projects:");
    for project in projects() {
        let marker = if project.featured { "*" } else { " " };
        println!("  {marker} {} - {}", project.title, project.description);
    }
    if want_stars {
        fetch_stars();
    }
}
