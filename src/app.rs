//! UI state holders for the four page variants.
//!
//! Each holder owns a small selection record and a view record. Actions mutate
//! the selection, rewrite the view and may announce through a live region.
//! Actions that the pages delay with a timer are queued as a pending change and
//! committed by [`HelloWorldDemo::advance`] / [`AccessibleHelloWorldApp::advance`];
//! a newer action replaces whatever is still pending.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::a11y::{Announcer, Politeness};
use crate::greeting::{
    self, DEFAULT_GREETING, GreetingStyle, Language, NameError, TimeOfDay, UnknownVariant,
};
use crate::settings::{self, AccessibilitySettings, FontSize, SettingsStore};

pub const LANGUAGE_DELAY: Duration = Duration::from_millis(500);
pub const THEME_DELAY: Duration = Duration::from_millis(300);
pub const RESET_DELAY: Duration = Duration::from_millis(500);
pub const HELLO_DELAY: Duration = Duration::from_millis(800);

const WELCOME_MESSAGE: &str = "Welcome to our Hello World application!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Modern,
    Classic,
    Minimal,
    Vibrant,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Modern,
        Theme::Classic,
        Theme::Minimal,
        Theme::Vibrant,
        Theme::Dark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Classic => "classic",
            Theme::Minimal => "minimal",
            Theme::Vibrant => "vibrant",
            Theme::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Modern => "Modern",
            Theme::Classic => "Classic",
            Theme::Minimal => "Minimal",
            Theme::Vibrant => "Vibrant",
            Theme::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("theme", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    #[default]
    Fade,
    Slide,
    Bounce,
    Typewriter,
    Pulse,
    Rotate,
}

impl Animation {
    pub const ALL: [Animation; 6] = [
        Animation::Fade,
        Animation::Slide,
        Animation::Bounce,
        Animation::Typewriter,
        Animation::Pulse,
        Animation::Rotate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Animation::Fade => "fade",
            Animation::Slide => "slide",
            Animation::Bounce => "bounce",
            Animation::Typewriter => "typewriter",
            Animation::Pulse => "pulse",
            Animation::Rotate => "rotate",
        }
    }

    /// Class added next to `hello-text`. Rotate is applied as an inline
    /// animation instead.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Animation::Fade => Some("animate-fade"),
            Animation::Slide => Some("animate-slide"),
            Animation::Bounce => Some("animate-bounce"),
            Animation::Typewriter => Some("typewriter-effect"),
            Animation::Pulse => Some("animate-pulse"),
            Animation::Rotate => None,
        }
    }

    pub fn inline_style(self) -> Option<&'static str> {
        match self {
            Animation::Rotate => Some("rotate 0.6s ease-out"),
            _ => None,
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Animation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Animation::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("animation", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DemoSelection {
    pub language: Language,
    pub theme: Theme,
    pub animation: Animation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoView {
    pub text: String,
    pub aria_label: String,
    pub subtitle: String,
    pub time_info: String,
    pub direction: &'static str,
    pub theme_class: String,
    pub animation_class: Option<&'static str>,
    pub inline_animation: Option<&'static str>,
    pub loading: bool,
}

impl DemoView {
    fn new() -> Self {
        let greeting = Language::En.demo_greeting();
        Self {
            text: greeting.text.to_string(),
            aria_label: format!("Greeting: {}", greeting.text),
            subtitle: greeting.subtitle.to_string(),
            time_info: String::new(),
            direction: "ltr",
            theme_class: format!("hello-container theme-{}", Theme::default()),
            animation_class: Animation::default().css_class(),
            inline_animation: None,
            loading: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub greeting_count: u64,
    pub language_switches: u64,
    pub theme_changes: u64,
    #[serde(skip)]
    pub session_start: Instant,
}

impl SessionStats {
    fn new(now: Instant) -> Self {
        Self {
            greeting_count: 0,
            language_switches: 0,
            theme_changes: 0,
            session_start: now,
        }
    }

    /// Elapsed session time as `MM:SS`.
    pub fn elapsed_label(&self, now: Instant) -> String {
        format_session_time(now.saturating_duration_since(self.session_start))
    }
}

pub fn format_session_time(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoChange {
    Language(Language),
    Theme(Theme),
    Reset,
}

#[derive(Debug, Clone, Copy)]
struct Pending<T> {
    remaining: Duration,
    change: T,
}

/// Keyboard shortcuts recognised by the demo page (Ctrl or Cmd held).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoShortcut {
    Randomize,
    TimeGreeting,
    Reset,
    Fullscreen,
}

impl DemoShortcut {
    pub fn from_key(key: &str, ctrl_or_meta: bool) -> Option<Self> {
        if !ctrl_or_meta {
            return None;
        }
        match key.to_ascii_lowercase().as_str() {
            "r" => Some(DemoShortcut::Randomize),
            "t" => Some(DemoShortcut::TimeGreeting),
            "h" => Some(DemoShortcut::Reset),
            "f" => Some(DemoShortcut::Fullscreen),
            _ => None,
        }
    }
}

/// The ten-language demo page.
#[derive(Debug, Clone)]
pub struct HelloWorldDemo {
    selection: DemoSelection,
    view: DemoView,
    stats: SessionStats,
    pending: Option<Pending<DemoChange>>,
    fullscreen: bool,
    announcer: Announcer,
}

impl Default for HelloWorldDemo {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl HelloWorldDemo {
    pub fn new(now: Instant) -> Self {
        Self {
            selection: DemoSelection::default(),
            view: DemoView::new(),
            stats: SessionStats::new(now),
            pending: None,
            fullscreen: false,
            announcer: Announcer::new("aria-live-region"),
        }
    }

    /// Page load: the demo opens on the time-of-day greeting.
    pub fn load(now: Instant, hour: u32, clock: &str) -> Self {
        let mut demo = Self::new(now);
        demo.show_time_greeting(hour, clock);
        demo
    }

    pub fn selection(&self) -> DemoSelection {
        self.selection
    }

    pub fn view(&self) -> &DemoView {
        &self.view
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn change_language(&mut self, language: Language) {
        self.schedule(DemoChange::Language(language), LANGUAGE_DELAY);
    }

    pub fn change_theme(&mut self, theme: Theme) {
        self.schedule(DemoChange::Theme(theme), THEME_DELAY);
    }

    pub fn reset(&mut self) {
        self.schedule(DemoChange::Reset, RESET_DELAY);
    }

    /// Animation changes apply immediately.
    pub fn change_animation(&mut self, animation: Animation) {
        self.selection.animation = animation;
        self.view.animation_class = animation.css_class();
        self.view.inline_animation = animation.inline_style();
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Language {
        let language = Language::ALL
            .choose(rng)
            .copied()
            .unwrap_or_default();
        self.change_language(language);
        language
    }

    pub fn show_time_greeting(&mut self, hour: u32, clock: &str) {
        let time = TimeOfDay::from_hour(hour);
        let language = self.selection.language;
        let text = language.time_greeting(time);
        let subtitle = language.demo_greeting().subtitle;
        let info = format!("Current time: {clock} - {}", time.label());
        self.update_greeting(text, subtitle, info);
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    pub fn handle_shortcut<R: Rng + ?Sized>(
        &mut self,
        shortcut: DemoShortcut,
        rng: &mut R,
        hour: u32,
        clock: &str,
    ) {
        match shortcut {
            DemoShortcut::Randomize => {
                self.randomize(rng);
            }
            DemoShortcut::TimeGreeting => self.show_time_greeting(hour, clock),
            DemoShortcut::Reset => self.reset(),
            DemoShortcut::Fullscreen => {
                self.toggle_fullscreen();
            }
        }
    }

    /// Lets simulated time pass; commits the pending change once its delay
    /// has elapsed. Returns whether anything was committed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(mut pending) = self.pending.take() else {
            return false;
        };
        if elapsed < pending.remaining {
            pending.remaining -= elapsed;
            self.pending = Some(pending);
            return false;
        }
        self.commit(pending.change);
        self.view.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.view.loading
    }

    fn schedule(&mut self, change: DemoChange, delay: Duration) {
        if let Some(previous) = self.pending.replace(Pending {
            remaining: delay,
            change,
        }) {
            debug!(previous = ?previous.change, next = ?change, "superseding pending demo change");
        }
        self.view.loading = true;
    }

    fn commit(&mut self, change: DemoChange) {
        match change {
            DemoChange::Language(language) => {
                self.selection.language = language;
                let greeting = language.demo_greeting();
                self.update_greeting(greeting.text, greeting.subtitle, String::new());
                self.stats.language_switches += 1;
                self.view.direction = language.direction();
                self.announcer
                    .announce(format!("Language changed to {}", language.native_name()));
            }
            DemoChange::Theme(theme) => {
                self.selection.theme = theme;
                self.view.theme_class = format!("hello-container theme-{theme}");
                self.stats.theme_changes += 1;
                self.announcer
                    .announce(format!("Theme changed to {}", theme.label()));
            }
            DemoChange::Reset => {
                self.selection = DemoSelection::default();
                self.view.direction = "ltr";
                self.view.theme_class = format!("hello-container theme-{}", Theme::default());
                let greeting = Language::En.demo_greeting();
                self.update_greeting(greeting.text, greeting.subtitle, String::new());
                self.announcer.announce("Demo reset to defaults");
            }
        }
    }

    fn update_greeting(&mut self, text: &str, subtitle: &str, time_info: String) {
        self.view.text = text.to_string();
        self.view.aria_label = format!("Greeting: {text}");
        self.view.subtitle = subtitle.to_string();
        self.view.time_info = time_info;
        self.change_animation(self.selection.animation);
        self.stats.greeting_count += 1;
    }
}

/// Greeting form with style radio buttons and persisted accessibility
/// settings.
pub struct AccessibleHelloWorldApp<S: SettingsStore> {
    store: S,
    current_user: String,
    greeting_style: GreetingStyle,
    settings: AccessibilitySettings,
    message: Option<String>,
    name_error: Option<NameError>,
    nav_expanded: bool,
    pending_hello: Option<Duration>,
    announcer: Announcer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibleAppStatus {
    pub initialized: bool,
    pub current_user: String,
    pub greeting_style: GreetingStyle,
    pub settings: AccessibilitySettings,
}

impl<S: SettingsStore> AccessibleHelloWorldApp<S> {
    /// Reads stored settings so a reload re-applies them.
    pub fn new(store: S) -> Self {
        let settings = settings::load_settings(&store);
        Self {
            store,
            current_user: String::new(),
            greeting_style: GreetingStyle::default(),
            settings,
            message: None,
            name_error: None,
            nav_expanded: false,
            pending_hello: None,
            announcer: Announcer::new("app-announcer"),
        }
    }

    pub fn settings(&self) -> AccessibilitySettings {
        self.settings
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn name_error(&self) -> Option<NameError> {
        self.name_error
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn body_classes(&self) -> Vec<&'static str> {
        self.settings.body_classes()
    }

    pub fn scroll_behavior(&self) -> &'static str {
        if self.settings.reduced_motion {
            "auto"
        } else {
            "smooth"
        }
    }

    /// Live validation as the visitor types; returns whether the value is
    /// acceptable.
    pub fn validate_name(&mut self, raw: &str) -> bool {
        self.name_error = greeting::validate_form_name(raw).err();
        self.name_error.is_none()
    }

    pub fn submit_name(&mut self, raw: &str) -> Result<(), NameError> {
        if let Err(err) = greeting::validate_form_name(raw) {
            self.name_error = Some(err);
            return Err(err);
        }
        self.name_error = None;
        self.current_user = raw.trim().to_string();
        self.refresh_message();
        self.announcer.announce("Greeting updated successfully");
        Ok(())
    }

    pub fn change_greeting_style(&mut self, style: GreetingStyle) {
        self.greeting_style = style;
        self.refresh_message();
        self.announcer
            .announce(format!("Greeting style changed to {style}"));
    }

    /// The hello button shows a spinner before writing the greeting.
    pub fn click_hello(&mut self) {
        self.pending_hello = Some(HELLO_DELAY);
        self.announcer.announce("Loading new greeting...");
    }

    pub fn is_loading(&self) -> bool {
        self.pending_hello.is_some()
    }

    pub fn advance(&mut self, elapsed: Duration) -> bool {
        match self.pending_hello {
            Some(remaining) if elapsed >= remaining => {
                self.pending_hello = None;
                self.refresh_message();
                true
            }
            Some(remaining) => {
                self.pending_hello = Some(remaining - elapsed);
                false
            }
            None => false,
        }
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.settings.reduced_motion = enabled;
        self.persist();
        self.announce_setting("Reduced motion", on_off(enabled));
    }

    pub fn set_high_contrast(&mut self, enabled: bool) {
        self.settings.high_contrast = enabled;
        self.persist();
        self.announce_setting("High contrast mode", on_off(enabled));
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.settings.font_size = size;
        self.persist();
        self.announce_setting("Font size changed to", size.as_str());
    }

    pub fn toggle_navigation(&mut self) -> bool {
        self.nav_expanded = !self.nav_expanded;
        self.nav_expanded
    }

    /// Escape closes the menu; returns whether focus should move back to the
    /// toggle button.
    pub fn escape(&mut self) -> bool {
        if self.nav_expanded {
            self.nav_expanded = false;
            return true;
        }
        false
    }

    pub fn is_nav_expanded(&self) -> bool {
        self.nav_expanded
    }

    pub fn status(&self) -> AccessibleAppStatus {
        AccessibleAppStatus {
            initialized: true,
            current_user: self.current_user.clone(),
            greeting_style: self.greeting_style,
            settings: self.settings,
        }
    }

    fn refresh_message(&mut self) {
        let name = Some(self.current_user.as_str());
        self.message = Some(self.greeting_style.render(name));
    }

    fn persist(&self) {
        if let Err(err) = settings::save_settings(&self.store, &self.settings) {
            warn!(error = %err, "could not save accessibility settings");
        }
    }

    fn announce_setting(&mut self, name: &str, value: &str) {
        self.announcer.announce(format!("{name} {value}"));
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStatus {
    pub current_language: Language,
    pub current_greeting: String,
    pub greeting_count: u64,
    pub user_name: String,
    pub has_input: bool,
}

/// The five-language greeting component with a name input.
#[derive(Debug, Clone)]
pub struct HelloWorldComponent {
    language: Language,
    text: String,
    welcome: String,
    message: String,
    personal_message: Option<String>,
    input: String,
    input_error: Option<NameError>,
    button_label: String,
    user_name: String,
    greeting_count: u64,
    announcer: Announcer,
}

impl Default for HelloWorldComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HelloWorldComponent {
    pub fn new() -> Self {
        Self {
            language: Language::En,
            text: DEFAULT_GREETING.to_string(),
            welcome: String::new(),
            message: WELCOME_MESSAGE.to_string(),
            personal_message: None,
            input: String::new(),
            input_error: None,
            button_label: "Say Hello".to_string(),
            user_name: String::new(),
            greeting_count: 0,
            announcer: Announcer::new("hello-world-announcer"),
        }
    }

    pub fn supported_languages() -> &'static [Language] {
        &Language::COMPONENT
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn personal_message(&self) -> Option<&str> {
        self.personal_message.as_deref()
    }

    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    pub fn input_error(&self) -> Option<NameError> {
        self.input_error
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    /// Unsupported languages are ignored; returns whether the language
    /// changed.
    pub fn set_language(&mut self, language: Language) -> bool {
        let Some(phrases) = language.component_phrases() else {
            return false;
        };
        self.language = language;
        self.text = phrases.hello.to_string();
        self.welcome = phrases.welcome.to_string();
        self.announcer
            .announce(format!("Language changed to {}", language.native_name()));
        true
    }

    pub fn input(&mut self, value: &str) {
        self.input = value.to_string();
        self.input_error = greeting::validate_component_input(value).err();
        let trimmed = value.trim();
        self.button_label = match greeting::first_name(trimmed) {
            Some(first) => format!("Say Hello to {first}!"),
            None => "Say Hello".to_string(),
        };
        if trimmed.is_empty() {
            self.reset_greeting();
            self.personal_message = None;
        }
    }

    /// Greets the current input, or picks a random phrase when it is empty.
    pub fn greet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, NameError> {
        let name = self.input.trim().to_string();
        if let Err(err) = greeting::validate_component_input(&name) {
            self.input_error = Some(err);
            self.announcer
                .announce_with(format!("⚠️ {err}"), Politeness::Assertive);
            return Err(err);
        }
        let text = if name.is_empty() {
            greeting::random_greeting_pool(self.language)
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| DEFAULT_GREETING.to_string())
        } else {
            greeting::format_component_greeting(self.language, &name)
        };
        self.message = greeting::sanitize_input(&text);
        self.personal_message = Some(if name.is_empty() {
            "Hello there! Enter your name above to get a personalized greeting. 😊".to_string()
        } else {
            format!("Nice to meet you, {name}! 👋")
        });
        self.greeting_count += 1;
        self.user_name = name;
        self.announcer.announce(format!("Text updated to: {text}"));
        Ok(text)
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.input_error = None;
        self.button_label = "Say Hello".to_string();
        self.message = WELCOME_MESSAGE.to_string();
        self.personal_message = None;
        self.user_name.clear();
        self.reset_greeting();
    }

    pub fn status(&self) -> ComponentStatus {
        ComponentStatus {
            current_language: self.language,
            current_greeting: self.message.clone(),
            greeting_count: self.greeting_count,
            user_name: self.user_name.clone(),
            has_input: !self.input.trim().is_empty(),
        }
    }

    fn reset_greeting(&mut self) {
        self.text = DEFAULT_GREETING.to_string();
    }
}

/// Shortcuts handled by the page shell (Alt held).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellShortcut {
    Greet,
    Reset,
}

impl ShellShortcut {
    pub fn from_key(key: &str, alt: bool) -> Option<Self> {
        if !alt {
            return None;
        }
        match key.to_ascii_lowercase().as_str() {
            "h" => Some(ShellShortcut::Greet),
            "r" => Some(ShellShortcut::Reset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellStatus {
    pub initialized: bool,
    pub name: &'static str,
    pub version: &'static str,
    pub paused: bool,
    pub component: ComponentStatus,
}

/// Page shell: hosts the greeting component, global shortcuts and the
/// application-wide announcer.
#[derive(Debug, Clone)]
pub struct HelloWorldApp {
    initialized: bool,
    paused: bool,
    component: HelloWorldComponent,
    announcer: Announcer,
}

impl Default for HelloWorldApp {
    fn default() -> Self {
        Self::new()
    }
}

impl HelloWorldApp {
    pub const NAME: &'static str = "Hello World App";

    pub fn new() -> Self {
        Self {
            initialized: false,
            paused: false,
            component: HelloWorldComponent::new(),
            announcer: Announcer::new("global-announcer"),
        }
    }

    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.announcer
            .announce("Hello World application loaded successfully");
    }

    pub fn component(&self) -> &HelloWorldComponent {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut HelloWorldComponent {
        &mut self.component
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    pub fn handle_shortcut<R: Rng + ?Sized>(&mut self, shortcut: ShellShortcut, rng: &mut R) {
        match shortcut {
            ShellShortcut::Greet => {
                if let Err(err) = self.component.greet(rng) {
                    debug!(error = %err, "shortcut greet rejected");
                }
            }
            ShellShortcut::Reset => self.component.reset(),
        }
    }

    /// Tab visibility: animations pause while hidden.
    pub fn set_visible(&mut self, visible: bool) {
        self.paused = !visible;
    }

    pub fn status(&self) -> ShellStatus {
        ShellStatus {
            initialized: self.initialized,
            name: Self::NAME,
            version: env!("CARGO_PKG_VERSION"),
            paused: self.paused,
            component: self.component.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn language_change_lands_after_one_tick() {
        let mut demo = HelloWorldDemo::new(Instant::now());
        demo.change_language(Language::Es);
        assert!(demo.is_loading());
        assert!(!demo.advance(Duration::from_millis(499)));
        assert_eq!(demo.view().text, "Hello, World!");
        assert!(demo.advance(Duration::from_millis(1)));
        assert_eq!(demo.view().text, "¡Hola, Mundo!");
        assert_eq!(demo.selection().language, Language::Es);
        assert_eq!(demo.stats().language_switches, 1);
        assert!(!demo.is_loading());
    }

    #[test]
    fn arabic_switches_direction() {
        let mut demo = HelloWorldDemo::new(Instant::now());
        demo.change_language(Language::Ar);
        demo.advance(LANGUAGE_DELAY);
        assert_eq!(demo.view().direction, "rtl");
        demo.change_language(Language::Fr);
        demo.advance(LANGUAGE_DELAY);
        assert_eq!(demo.view().direction, "ltr");
    }

    #[test]
    fn last_write_wins_for_pending_changes() {
        let mut demo = HelloWorldDemo::new(Instant::now());
        demo.change_language(Language::De);
        demo.advance(Duration::from_millis(200));
        demo.change_language(Language::It);
        demo.advance(LANGUAGE_DELAY);
        assert_eq!(demo.view().text, "Ciao, Mondo!");
        assert_eq!(demo.stats().language_switches, 1);
    }

    #[test]
    fn repeated_identical_selection_is_stable() {
        let mut demo = HelloWorldDemo::new(Instant::now());
        for _ in 0..2 {
            demo.change_language(Language::Pt);
            demo.advance(LANGUAGE_DELAY);
        }
        assert_eq!(demo.view().text, "Olá, Mundo!");
        assert_eq!(demo.selection().language, Language::Pt);
    }

    #[test]
    fn theme_change_counts_and_sets_class() {
        let mut demo = HelloWorldDemo::new(Instant::now());
        demo.change_theme(Theme::Dark);
        assert!(demo.advance(THEME_DELAY));
        assert_eq!(demo.view().theme_class, "hello-container theme-dark");
        assert_eq!(demo.stats().theme_changes, 1);
        assert_eq!(demo.announcer().last(), Some("Theme changed to Dark"));
    }

    #[test]
    fn rotate_animation_uses_inline_style() {
        let mut demo = HelloWorldDemo::new(Instant::now());
        demo.change_animation(Animation::Rotate);
        assert_eq!(demo.view().animation_class, None);
        assert_eq!(demo.view().inline_animation, Some("rotate 0.6s ease-out"));
        demo.change_animation(Animation::Typewriter);
        assert_eq!(demo.view().animation_class, Some("typewriter-effect"));
    }

    #[test]
    fn load_shows_time_greeting_and_counts_it() {
        let demo = HelloWorldDemo::load(Instant::now(), 9, "09:00:00");
        assert_eq!(demo.view().text, "Good Morning, World!");
        assert_eq!(demo.view().time_info, "Current time: 09:00:00 - morning");
        assert_eq!(demo.stats().greeting_count, 1);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut demo = HelloWorldDemo::new(Instant::now());
        demo.change_language(Language::Ar);
        demo.advance(LANGUAGE_DELAY);
        demo.change_theme(Theme::Vibrant);
        demo.advance(THEME_DELAY);
        demo.reset();
        demo.advance(RESET_DELAY);
        assert_eq!(demo.selection(), DemoSelection::default());
        assert_eq!(demo.view().direction, "ltr");
        assert_eq!(demo.view().text, "Hello, World!");
    }

    #[test]
    fn randomize_picks_a_catalog_language() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut demo = HelloWorldDemo::new(Instant::now());
        let picked = demo.randomize(&mut rng);
        demo.advance(LANGUAGE_DELAY);
        assert_eq!(demo.view().text, picked.demo_greeting().text);
    }

    #[test]
    fn session_time_is_minutes_and_seconds() {
        assert_eq!(format_session_time(Duration::from_secs(0)), "00:00");
        assert_eq!(format_session_time(Duration::from_secs(125)), "02:05");
    }

    #[test]
    fn demo_shortcuts_require_modifier() {
        assert_eq!(DemoShortcut::from_key("R", true), Some(DemoShortcut::Randomize));
        assert_eq!(DemoShortcut::from_key("r", false), None);
    }

    #[test]
    fn reduced_motion_survives_reload() {
        let mut app = AccessibleHelloWorldApp::new(MemoryStore::new());
        app.set_reduced_motion(true);
        assert_eq!(app.announcer().last(), Some("Reduced motion enabled"));
        assert_eq!(app.scroll_behavior(), "auto");

        let reloaded = AccessibleHelloWorldApp::new(app.into_store());
        assert!(reloaded.settings().reduced_motion);
        assert_eq!(reloaded.body_classes(), vec!["reduce-motion"]);
    }

    #[test]
    fn font_size_announcement() {
        let mut app = AccessibleHelloWorldApp::new(MemoryStore::new());
        app.set_font_size(FontSize::Large);
        assert_eq!(app.announcer().last(), Some("Font size changed to large"));
        assert_eq!(app.body_classes(), vec!["font-size-large"]);
    }

    #[test]
    fn submit_rejects_invalid_name_and_keeps_previous_user() {
        let mut app = AccessibleHelloWorldApp::new(MemoryStore::new());
        app.submit_name("Ann").unwrap();
        assert_eq!(
            app.message(),
            Some("Good day, Ann! Welcome to our accessible Hello World application.")
        );
        assert_eq!(app.submit_name("A"), Err(NameError::TooShort));
        assert_eq!(app.status().current_user, "Ann");
    }

    #[test]
    fn style_change_rerenders_message() {
        let mut app = AccessibleHelloWorldApp::new(MemoryStore::new());
        app.change_greeting_style(GreetingStyle::Casual);
        assert_eq!(
            app.message(),
            Some("Hey there! Welcome to our Hello World app!")
        );
        assert_eq!(
            app.announcer().last(),
            Some("Greeting style changed to casual")
        );
    }

    #[test]
    fn hello_button_waits_for_delay() {
        let mut app = AccessibleHelloWorldApp::new(MemoryStore::new());
        app.click_hello();
        assert!(app.is_loading());
        assert!(!app.advance(Duration::from_millis(500)));
        assert!(app.advance(Duration::from_millis(300)));
        assert!(app.message().is_some());
    }

    #[test]
    fn escape_closes_open_navigation() {
        let mut app = AccessibleHelloWorldApp::new(MemoryStore::new());
        assert!(!app.escape());
        app.toggle_navigation();
        assert!(app.escape());
        assert!(!app.is_nav_expanded());
    }

    #[test]
    fn component_ignores_unsupported_language() {
        let mut component = HelloWorldComponent::new();
        assert!(!component.set_language(Language::Ja));
        assert_eq!(component.language(), Language::En);
        assert!(component.set_language(Language::De));
        assert_eq!(component.text(), "Hallo Welt");
        assert_eq!(
            component.announcer().last(),
            Some("Language changed to Deutsch")
        );
    }

    #[test]
    fn component_greets_named_visitor() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut component = HelloWorldComponent::new();
        component.set_language(Language::Es);
        component.input("Ann Lee");
        assert_eq!(component.button_label(), "Say Hello to Ann!");
        let text = component.greet(&mut rng).unwrap();
        assert_eq!(text, "Hola Ann Lee!");
        assert_eq!(component.personal_message(), Some("Nice to meet you, Ann Lee! 👋"));
        assert_eq!(component.status().greeting_count, 1);
    }

    #[test]
    fn component_rejects_markup() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut component = HelloWorldComponent::new();
        component.input("<b>x</b>");
        assert_eq!(component.input_error(), Some(NameError::ContainsMarkup));
        assert_eq!(component.greet(&mut rng), Err(NameError::ContainsMarkup));
        assert_eq!(component.status().greeting_count, 0);
    }

    #[test]
    fn component_reset_restores_default_text() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut component = HelloWorldComponent::new();
        component.set_language(Language::It);
        component.input("Bea");
        component.greet(&mut rng).unwrap();
        component.reset();
        assert_eq!(component.text(), DEFAULT_GREETING);
        assert_eq!(component.message(), WELCOME_MESSAGE);
        assert_eq!(component.button_label(), "Say Hello");
        assert!(component.personal_message().is_none());
    }

    #[test]
    fn shell_announces_once_and_routes_shortcuts() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut app = HelloWorldApp::new();
        app.init();
        app.init();
        assert_eq!(app.announcer().history().len(), 1);
        app.component_mut().input("Zoe");
        let shortcut = ShellShortcut::from_key("H", true).unwrap();
        app.handle_shortcut(shortcut, &mut rng);
        assert_eq!(app.status().component.greeting_count, 1);
        app.handle_shortcut(ShellShortcut::Reset, &mut rng);
        assert_eq!(app.component().text(), DEFAULT_GREETING);
        assert!(app.status().initialized);
    }
}
