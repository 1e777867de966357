//! Call panel state definitions.

use crate::panel::history::CallRecord;

/// Coins a fresh session starts with.
pub const STARTING_COINS: u32 = 100;

/// Coins deducted per placed call.
pub const CALL_COST: u32 = 20;

/// Tick rate the draw loop feeds into `tick()`.
pub const TICKS_PER_SEC: u32 = 10;

/// How long a toast stays fully visible (3 seconds).
pub const TOAST_DWELL_TICKS: u32 = 3 * TICKS_PER_SEC;

/// Slide-in/slide-out span at either end of a toast's life.
pub const TOAST_SLIDE_TICKS: u32 = 3;

/// One listed hotline service.
#[derive(Clone, Debug)]
pub struct Service {
    pub name: String,
    pub number: String,
    /// Explicit favorite flag; render maps it to the heart glyph.
    pub favorited: bool,
}

impl Service {
    fn new(name: &str, number: &str) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
            favorited: false,
        }
    }

    /// The hotline directory shown on the panel, in display order.
    pub fn directory() -> Vec<Service> {
        vec![
            Service::new("National Emergency", "999"),
            Service::new("Police Helpline", "999"),
            Service::new("Fire Service", "999"),
            Service::new("Ambulance Service", "1994-999999"),
            Service::new("Women & Child Helpline", "109"),
            Service::new("Anti-Corruption Helpline", "106"),
            Service::new("Electricity Outage", "16216"),
            Service::new("Brac Helpline", "16445"),
            Service::new("Railway Helpline", "163"),
        ]
    }
}

/// Visual flavour of a toast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification. Each toast carries its own countdown; several
/// may be alive at once and they expire independently.
#[derive(Clone, Debug)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    /// Remaining lifetime in ticks; dropped at zero.
    pub ticks_left: u32,
    /// Initial lifetime, used to derive the slide-in offset.
    pub max_ticks: u32,
}

/// Full state of the call panel. Mutated only through `logic` transitions,
/// all driven from the single UI thread.
pub struct PanelState {
    /// Total heart clicks; increments on un-favoriting too.
    pub hearts_count: u32,
    pub coins_count: u32,
    pub copy_count: u32,
    pub services: Vec<Service>,
    /// Newest first, capped at `history::HISTORY_CAP`.
    pub history: Vec<CallRecord>,
    pub toasts: Vec<Toast>,
    /// Frame counter for subtle UI animation.
    pub anim_frame: u32,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            hearts_count: 0,
            coins_count: STARTING_COINS,
            copy_count: 0,
            services: Service::directory(),
            history: Vec::new(),
            toasts: Vec::new(),
            anim_frame: 0,
        }
    }

    pub fn add_toast(&mut self, text: &str, kind: ToastKind) {
        let life = TOAST_DWELL_TICKS + 2 * TOAST_SLIDE_TICKS;
        self.toasts.push(Toast {
            text: text.to_string(),
            kind,
            ticks_left: life,
            max_ticks: life,
        });
    }
}
