//! Greeting catalogs shared by the HTTP endpoints, the CLI and the UI state
//! holders.
//!
//! Everything here is literal text keyed by small enums. The demo page knows
//! ten languages, the interactive component only the first five.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default greeting shown before any interaction.
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Maximum accepted length for a visitor name in the component input.
pub const MAX_NAME_LEN: usize = 50;

const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ru,
    Ja,
    Zh,
    Ar,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Ru,
        Language::Ja,
        Language::Zh,
        Language::Ar,
    ];

    /// Languages offered by the embeddable greeting component.
    pub const COMPONENT: [Language; 5] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Name of the language in the language itself, as shown in selectors.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::It => "Italiano",
            Language::Pt => "Português",
            Language::Ru => "Русский",
            Language::Ja => "日本語",
            Language::Zh => "中文",
            Language::Ar => "العربية",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn direction(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    /// Headline and subtitle shown by the demo page.
    pub fn demo_greeting(self) -> DemoGreeting {
        let (text, subtitle) = match self {
            Language::En => (
                "Hello, World!",
                "Welcome to our interactive demonstration",
            ),
            Language::Es => (
                "¡Hola, Mundo!",
                "Bienvenido a nuestra demostración interactiva",
            ),
            Language::Fr => (
                "Bonjour, le Monde!",
                "Bienvenue dans notre démonstration interactive",
            ),
            Language::De => (
                "Hallo, Welt!",
                "Willkommen zu unserer interaktiven Demonstration",
            ),
            Language::It => (
                "Ciao, Mondo!",
                "Benvenuto nella nostra dimostrazione interattiva",
            ),
            Language::Pt => ("Olá, Mundo!", "Bem-vindo à nossa demonstração interativa"),
            Language::Ru => (
                "Привет, Мир!",
                "Добро пожаловать на нашу интерактивную демонстрацию",
            ),
            Language::Ja => (
                "こんにちは、世界！",
                "インタラクティブなデモンストレーションへようこそ",
            ),
            Language::Zh => ("你好，世界！", "欢迎来到我们的互动演示"),
            Language::Ar => ("مرحبا بالعالم!", "مرحبا بكم في عرضنا التفاعلي"),
        };
        DemoGreeting { text, subtitle }
    }

    /// Component phrases; `None` for languages the component does not carry.
    pub fn component_phrases(self) -> Option<ComponentPhrases> {
        let (hello, world, description, welcome) = match self {
            Language::En => (
                "Hello World",
                "World",
                "A friendly greeting to the world",
                "Welcome to our accessible application",
            ),
            Language::Es => (
                "Hola Mundo",
                "Mundo",
                "Un saludo amigable al mundo",
                "Bienvenido a nuestra aplicación accesible",
            ),
            Language::Fr => (
                "Bonjour le Monde",
                "le Monde",
                "Une salutation amicale au monde",
                "Bienvenue dans notre application accessible",
            ),
            Language::De => (
                "Hallo Welt",
                "Welt",
                "Ein freundlicher Gruß an die Welt",
                "Willkommen in unserer barrierefreien Anwendung",
            ),
            Language::It => (
                "Ciao Mondo",
                "Mondo",
                "Un saluto amichevole al mondo",
                "Benvenuto nella nostra applicazione accessibile",
            ),
            _ => return None,
        };
        Some(ComponentPhrases {
            hello,
            world,
            description,
            welcome,
        })
    }

    /// Time-of-day greeting. Only en/es/fr carry their own table; everything
    /// else falls back to English.
    pub fn time_greeting(self, time: TimeOfDay) -> &'static str {
        match (self, time) {
            (Language::Es, TimeOfDay::Morning) => "¡Buenos Días, Mundo!",
            (Language::Es, TimeOfDay::Afternoon) => "¡Buenas Tardes, Mundo!",
            (Language::Es, TimeOfDay::Evening) => "¡Buenas Tardes, Mundo!",
            (Language::Es, TimeOfDay::Night) => "¡Buenas Noches, Mundo!",
            (Language::Fr, TimeOfDay::Morning) => "Bonjour, le Monde!",
            (Language::Fr, TimeOfDay::Afternoon) => "Bon Après-midi, le Monde!",
            (Language::Fr, TimeOfDay::Evening) => "Bonsoir, le Monde!",
            (Language::Fr, TimeOfDay::Night) => "Bonne Nuit, le Monde!",
            (_, TimeOfDay::Morning) => "Good Morning, World!",
            (_, TimeOfDay::Afternoon) => "Good Afternoon, World!",
            (_, TimeOfDay::Evening) => "Good Evening, World!",
            (_, TimeOfDay::Night) => "Good Night, World!",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownVariant::new("language", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoGreeting {
    pub text: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentPhrases {
    pub hello: &'static str,
    /// The word(s) for "world" inside `hello`, swapped out for a name.
    pub world: &'static str,
    pub description: &'static str,
    pub welcome: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Buckets a 24h clock hour: 5–11 morning, 12–16 afternoon, 17–20
    /// evening, anything else night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreetingStyle {
    #[default]
    Formal,
    Casual,
    Enthusiastic,
}

impl GreetingStyle {
    pub const ALL: [GreetingStyle; 3] = [
        GreetingStyle::Formal,
        GreetingStyle::Casual,
        GreetingStyle::Enthusiastic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GreetingStyle::Formal => "formal",
            GreetingStyle::Casual => "casual",
            GreetingStyle::Enthusiastic => "enthusiastic",
        }
    }

    /// Renders the greeting for an optional visitor name. Empty names count
    /// as anonymous.
    pub fn render(self, name: Option<&str>) -> String {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        match (self, name) {
            (GreetingStyle::Formal, None) => {
                "Good day! Welcome to our accessible Hello World application.".to_string()
            }
            (GreetingStyle::Formal, Some(name)) => format!(
                "Good day, {name}! Welcome to our accessible Hello World application."
            ),
            (GreetingStyle::Casual, None) => "Hey there! Welcome to our Hello World app!".to_string(),
            (GreetingStyle::Casual, Some(name)) => {
                format!("Hey {name}! Welcome to our Hello World app!")
            }
            (GreetingStyle::Enthusiastic, None) => "Hello there! We're so excited you're here! Welcome to our amazing Hello World app!".to_string(),
            (GreetingStyle::Enthusiastic, Some(name)) => format!(
                "Hello {name}! We're so excited you're here! Welcome to our amazing Hello World app!"
            ),
        }
    }
}

impl fmt::Display for GreetingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GreetingStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GreetingStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("greeting style", s))
    }
}

/// Raised when a selector receives a value outside its option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    TooShort,
    InvalidCharacters,
    TooLong,
    ContainsMarkup,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::TooShort => write!(f, "Name must be at least 2 characters long"),
            NameError::InvalidCharacters => write!(
                f,
                "Name can only contain letters, spaces, hyphens, and apostrophes"
            ),
            NameError::TooLong => write!(f, "Name is too long (maximum 50 characters)"),
            NameError::ContainsMarkup => write!(f, "HTML tags are not allowed"),
        }
    }
}

impl std::error::Error for NameError {}

/// Validation used by the accessible greeting form. The name is optional, so
/// an empty (or whitespace) value passes.
pub fn validate_form_name(raw: &str) -> Result<(), NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Ok(());
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(NameError::TooShort);
    }
    let allowed = |c: char| c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-';
    if !name.chars().all(allowed) {
        return Err(NameError::InvalidCharacters);
    }
    Ok(())
}

/// Validation used by the greeting component input.
pub fn validate_component_input(raw: &str) -> Result<(), NameError> {
    if raw.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    if contains_tag(raw) {
        return Err(NameError::ContainsMarkup);
    }
    Ok(())
}

/// Strips tags and markup-significant characters, caps the length and trims.
pub fn sanitize_input(raw: &str) -> String {
    let mut without_tags = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                without_tags.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    without_tags.push_str(rest);
    let cleaned: String = without_tags
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\'' | '&'))
        .take(MAX_NAME_LEN)
        .collect();
    cleaned.trim().to_string()
}

fn contains_tag(input: &str) -> bool {
    input
        .find('<')
        .is_some_and(|open| input[open + 1..].contains('>'))
}

/// Returns the first whitespace-separated word of a name.
pub fn first_name(name: &str) -> Option<&str> {
    name.split_whitespace().next()
}

/// Personalised component greeting, e.g. `Hola Ann!` for Spanish.
pub fn format_component_greeting(language: Language, name: &str) -> String {
    let phrases = language
        .component_phrases()
        .or_else(|| Language::En.component_phrases());
    let clean = sanitize_input(name);
    match phrases {
        Some(phrases) => format!("{}!", phrases.hello.replacen(phrases.world, &clean, 1)),
        None => format!("Hello {clean}!"),
    }
}

/// Candidate texts for the component's "surprise me" button.
pub fn random_greeting_pool(language: Language) -> Vec<String> {
    let phrases = language
        .component_phrases()
        .or_else(|| Language::En.component_phrases());
    let mut pool = Vec::with_capacity(7);
    if let Some(phrases) = phrases {
        pool.push(phrases.hello.to_string());
        pool.push(format!("{}!", phrases.hello));
        pool.push(phrases.welcome.to_string());
    }
    pool.extend(
        ["Welcome!", "Greetings!", "Hi there!", "Good day!"]
            .iter()
            .map(|s| s.to_string()),
    );
    pool
}

/// The `/hello` endpoint message; an empty name falls back to `World`.
pub fn hello_message(name: Option<&str>) -> String {
    let name = name.filter(|n| !n.is_empty()).unwrap_or("World");
    format!("Hello, {name}!")
}

/// Messages cycled by the landing page's "Say Hello" button.
pub const LANDING_MESSAGES: [&str; 4] = [
    "Hello, World! 👋",
    "Welcome to our accessible application! 🌟",
    "Accessibility matters for everyone! ♿",
    "Thank you for visiting! 🙏",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip_through_lookup() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("ES"), Some(Language::Es));
        assert_eq!(Language::from_code("xx"), None);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn demo_catalog_uses_exact_literals() {
        assert_eq!(Language::En.demo_greeting().text, "Hello, World!");
        assert_eq!(Language::Es.demo_greeting().text, "¡Hola, Mundo!");
        assert_eq!(Language::Ja.demo_greeting().text, "こんにちは、世界！");
        assert_eq!(Language::Ar.demo_greeting().text, "مرحبا بالعالم!");
    }

    #[test]
    fn only_arabic_is_rtl() {
        let rtl: Vec<_> = Language::ALL.into_iter().filter(|l| l.is_rtl()).collect();
        assert_eq!(rtl, vec![Language::Ar]);
        assert_eq!(Language::Ar.direction(), "rtl");
        assert_eq!(Language::De.direction(), "ltr");
    }

    #[test]
    fn component_catalog_covers_five_languages() {
        for lang in Language::COMPONENT {
            assert!(lang.component_phrases().is_some(), "{lang}");
        }
        assert!(Language::Ru.component_phrases().is_none());
    }

    #[test]
    fn time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
    }

    #[test]
    fn time_greeting_falls_back_to_english() {
        assert_eq!(
            Language::De.time_greeting(TimeOfDay::Morning),
            "Good Morning, World!"
        );
        assert_eq!(
            Language::Fr.time_greeting(TimeOfDay::Evening),
            "Bonsoir, le Monde!"
        );
    }

    #[test]
    fn greeting_styles_render_named_and_anonymous() {
        assert_eq!(
            GreetingStyle::Casual.render(Some("Ann")),
            "Hey Ann! Welcome to our Hello World app!"
        );
        assert_eq!(
            GreetingStyle::Formal.render(Some("   ")),
            GreetingStyle::Formal.render(None)
        );
        assert_eq!("ENTHUSIASTIC".parse(), Ok(GreetingStyle::Enthusiastic));
    }

    #[test]
    fn form_name_validation() {
        assert_eq!(validate_form_name(""), Ok(()));
        assert_eq!(validate_form_name("A"), Err(NameError::TooShort));
        assert_eq!(validate_form_name("Mary-Jane O'Neil"), Ok(()));
        assert_eq!(
            validate_form_name("R2D2"),
            Err(NameError::InvalidCharacters)
        );
    }

    #[test]
    fn component_input_validation() {
        assert_eq!(validate_component_input("Ann"), Ok(()));
        assert_eq!(
            validate_component_input("<b>Ann</b>"),
            Err(NameError::ContainsMarkup)
        );
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(validate_component_input(&long), Err(NameError::TooLong));
    }

    #[test]
    fn sanitize_strips_markup_and_caps_length() {
        assert_eq!(sanitize_input("  <script>x</script>Ann  "), "xAnn");
        assert_eq!(sanitize_input("Tom & \"Jerry\""), "Tom  Jerry");
        assert_eq!(sanitize_input(&"b".repeat(80)).len(), MAX_NAME_LEN);
    }

    #[test]
    fn component_greeting_replaces_world() {
        assert_eq!(format_component_greeting(Language::En, "Ann"), "Hello Ann!");
        assert_eq!(format_component_greeting(Language::Es, "Ann"), "Hola Ann!");
        assert_eq!(
            format_component_greeting(Language::Fr, "Ann"),
            "Bonjour Ann!"
        );
    }

    #[test]
    fn hello_message_defaults_to_world() {
        assert_eq!(hello_message(Some("Ann")), "Hello, Ann!");
        assert_eq!(hello_message(None), "Hello, World!");
        assert_eq!(hello_message(Some("")), "Hello, World!");
        assert_eq!(hello_message(Some("  ")), "Hello,   !");
    }

    #[test]
    fn random_pool_has_seven_entries() {
        let pool = random_greeting_pool(Language::It);
        assert_eq!(pool.len(), 7);
        assert_eq!(pool[0], "Ciao Mondo");
    }
}
