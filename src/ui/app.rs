use crate::config::Config;
use crate::console::Console;
use crate::hooks::{EffectSlot, Memo};
use crate::lesson::{
    button, render_logger, render_page, GuestCounter, PageProps, PageView, RenderContext,
};
use crate::ui::alert::{AlertIntent, AlertReducer, AlertState};
use crate::ui::button::{ButtonIntent, ButtonReducer, ButtonState};
use crate::ui::mvi::Reducer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Drinkers,
    Button,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
/// Evaluates to `true` when the state changed.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let before = $self.$field.clone();
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field != before
    }};
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    strict_mode: bool,
    /// Shared state owned by the top of the tree.
    drinkers: u32,
    guest_count: u32,
    /// Local state of the button with an effect (MVI pattern).
    button: ButtonState,
    alert: AlertState,
    /// Button intent held back until the blocking alert is dismissed.
    after_alert: Option<ButtonIntent>,
    alerts_shown: usize,
    console: Console,
    /// Lives outside every component; see [`GuestCounter`].
    guests: GuestCounter,
    recipe_memo: Memo<u32, f64>,
    render_logger_effect: EffectSlot<u32>,
    button_effect: EffectSlot<bool>,
    render_requested: bool,
    render_passes: usize,
    commits: usize,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Drinkers,
            strict_mode: config.lesson.strict_mode,
            drinkers: config.lesson.initial_drinkers,
            guest_count: config.lesson.guest_count,
            button: ButtonState::default(),
            alert: AlertState::default(),
            after_alert: None,
            alerts_shown: 0,
            console: Console::new(config.ui.console_capacity),
            guests: GuestCounter::new(),
            recipe_memo: Memo::new(),
            render_logger_effect: EffectSlot::new(),
            button_effect: EffectSlot::new(),
            render_requested: true,
            render_passes: 0,
            commits: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Drinkers => Focus::Button,
            Focus::Button => Focus::Drinkers,
        };
        self.render_requested = true;
    }

    pub fn focus_prev(&mut self) {
        // Two controls, so backwards is the same cycle.
        self.focus_next();
    }

    pub fn drinkers(&self) -> u32 {
        self.drinkers
    }

    /// Setter handed to the drinkers input.
    pub fn set_drinkers(&mut self, drinkers: u32) {
        if self.drinkers != drinkers {
            self.drinkers = drinkers;
            self.render_requested = true;
        }
    }

    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    pub fn is_strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub fn button(&self) -> ButtonState {
        self.button
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn alerts_shown(&self) -> usize {
        self.alerts_shown
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn guest_counter(&self) -> u32 {
        self.guests.current()
    }

    pub fn recipe_computations(&self) -> usize {
        self.recipe_memo.computations()
    }

    pub fn render_passes(&self) -> usize {
        self.render_passes
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Button click handler: the alert goes up first; the state update runs
    /// once the alert has been dismissed.
    pub fn press_button(&mut self) {
        if self.alert.is_visible() {
            return;
        }
        dispatch_mvi!(
            self,
            alert,
            AlertReducer,
            AlertIntent::Show {
                message: button::ALERT_MESSAGE.to_string(),
            }
        );
        self.alerts_shown += 1;
        self.after_alert = Some(ButtonIntent::Press);
        tracing::debug!(alerts = self.alerts_shown, "alert shown");
    }

    pub fn dismiss_alert(&mut self) {
        dispatch_mvi!(self, alert, AlertReducer, AlertIntent::Dismiss);
        if let Some(intent) = self.after_alert.take() {
            if dispatch_mvi!(self, button, ButtonReducer, intent) {
                self.render_requested = true;
            }
        }
    }

    /// Re-render without any state change.
    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    /// Returns and clears the pending render request.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    /// Runs the component tree once (twice in strict mode) and returns the
    /// page. No effects run here.
    pub fn render(&mut self) -> PageView {
        let props = PageProps {
            drinkers: self.drinkers,
            guest_count: self.guest_count,
            clicked: self.button.is_clicked(),
        };
        let passes = if self.strict_mode { 2 } else { 1 };
        let mut page = self.render_pass(&props);
        for _ in 1..passes {
            page = self.render_pass(&props);
        }
        tracing::trace!(
            passes,
            guests = self.guests.current(),
            "rendered page"
        );
        page
    }

    fn render_pass(&mut self, props: &PageProps) -> PageView {
        self.render_passes += 1;
        let mut cx = RenderContext {
            guests: &self.guests,
            recipe_memo: &mut self.recipe_memo,
        };
        render_page(props, &mut cx)
    }

    /// Called once `page` is on screen. Runs the effects whose dependencies
    /// changed since the previous commit, in tree order.
    pub fn commit(&mut self, page: &PageView) {
        self.commits += 1;
        if self.render_logger_effect.sync(page.render_logger.watched) {
            render_logger::effect(page.render_logger, &mut self.console);
        }
        if self.button_effect.sync(page.button.clicked) {
            button::effect(page.button, &mut self.console);
        }
    }
}
