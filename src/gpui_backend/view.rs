use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use gpui::prelude::*;
use gpui::{
    AsyncWindowContext, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point,
    Timer, Window, canvas, div,
};
use tracing::debug;

use crate::animation::Tween;
use crate::compose::compose_frame;
use crate::data::{ChartData, Sample};
use crate::geom::{ScreenPoint, ScreenSize};
use crate::label::ValueFormatter;
use crate::map::chart_points;
use crate::scrub::ScrubState;
use crate::style::Theme;

use super::config::ChartViewConfig;
use super::paint::{paint_frame, to_hsla};

type SelectHandler<T> = Arc<dyn Fn(Option<T>) + Send + Sync>;

/// The chart element's placement within the window.
#[derive(Debug, Clone, Copy)]
struct ChartLayout {
    origin: ScreenPoint,
    size: ScreenSize,
}

impl ChartLayout {
    fn contains(&self, pt: ScreenPoint) -> bool {
        pt.x >= self.origin.x
            && pt.x <= self.origin.x + self.size.width
            && pt.y >= self.origin.y
            && pt.y <= self.origin.y + self.size.height
    }
}

#[derive(Debug)]
struct ChartUiState {
    scrub: ScrubState,
    reveal: Tween,
    layout: Option<ChartLayout>,
}

impl ChartUiState {
    fn new(config: &ChartViewConfig) -> Self {
        Self {
            scrub: ScrubState::new(),
            reveal: Tween::new(config.reveal_duration, config.reveal_easing),
            layout: None,
        }
    }
}

/// A GPUI view that renders a [`ChartData`] as a scrubbable trend line.
///
/// The view handles drag scrubbing, drives the mount-time reveal, and
/// delegates data management to the underlying [`ChartData`].
#[derive(Clone)]
pub struct GpuiChartView<T> {
    data: Arc<RwLock<ChartData<T>>>,
    state: Arc<RwLock<ChartUiState>>,
    config: ChartViewConfig,
    theme: Theme,
    formatter: ValueFormatter,
    on_select: Option<SelectHandler<T>>,
    reveal_started: bool,
}

impl<T: Sample + Clone + 'static> GpuiChartView<T> {
    /// Create a new GPUI chart view for the given data.
    ///
    /// Uses the default [`ChartViewConfig`].
    pub fn new(data: ChartData<T>) -> Self {
        Self::with_config(data, ChartViewConfig::default())
    }

    /// Create a new GPUI chart view with a custom configuration.
    pub fn with_config(data: ChartData<T>, config: ChartViewConfig) -> Self {
        let state = ChartUiState::new(&config);
        Self {
            data: Arc::new(RwLock::new(data)),
            state: Arc::new(RwLock::new(state)),
            config,
            theme: Theme::default(),
            formatter: ValueFormatter::default(),
            on_select: None,
            reveal_started: false,
        }
    }

    /// Set the theme used by the chart.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the formatter for scrub labels.
    pub fn with_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Register the selection callback.
    ///
    /// During a drag the handler receives each newly resolved sample; on
    /// drag end it receives `None` exactly once.
    pub fn on_select(mut self, handler: impl Fn(Option<T>) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Arc::new(handler));
        self
    }

    /// Get a handle for mutating the underlying chart data.
    ///
    /// This is useful for streaming updates from async tasks.
    pub fn chart_handle(&self) -> ChartHandle<T> {
        ChartHandle {
            data: Arc::clone(&self.data),
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let pos = screen_point(ev.position);
        let within = self
            .state
            .read()
            .expect("chart state lock")
            .layout
            .is_some_and(|layout| layout.contains(pos));
        if !within {
            return;
        }
        self.apply_scrub(ev.position, cx);
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let scrubbing = self
            .state
            .read()
            .expect("chart state lock")
            .scrub
            .is_scrubbing();
        if !scrubbing {
            return;
        }
        self.apply_scrub(ev.position, cx);
    }

    fn on_mouse_up(&mut self, _ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let ended = self
            .state
            .write()
            .expect("chart state lock")
            .scrub
            .drag_end();
        if !ended {
            return;
        }
        debug!("scrub ended");
        if let Some(on_select) = &self.on_select {
            on_select(None);
        }
        cx.notify();
    }

    fn apply_scrub(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        // Locks are released before the callback runs so a handler may read
        // the chart through its handle.
        let notification = {
            let mut state = self.state.write().expect("chart state lock");
            let Some(layout) = state.layout else {
                return;
            };
            let local_x = f32::from(position.x) - layout.origin.x;
            let data = self.data.read().expect("chart data lock");
            let values = data.values();
            let points = chart_points(&values, layout.size);
            state
                .scrub
                .drag_update(local_x, &values, &points, layout.size, &self.formatter)
                .and_then(|index| data.sample(index).cloned().map(|sample| (index, sample)))
        };
        if let Some((index, sample)) = notification {
            debug!(index, "scrub selection changed");
            if let Some(on_select) = &self.on_select {
                on_select(Some(sample));
            }
        }
        cx.notify();
    }

    fn ensure_reveal(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.reveal_started {
            return;
        }
        self.reveal_started = true;

        if self.config.skip_reveal {
            self.state.write().expect("chart state lock").reveal = Tween::finished();
            return;
        }

        debug!("reveal started");
        {
            let mut state = self.state.write().expect("chart state lock");
            state.reveal = Tween::new(self.config.reveal_duration, self.config.reveal_easing);
            state.reveal.start(Instant::now());
        }

        let state = Arc::clone(&self.state);
        let view = cx.entity();
        window
            .spawn(cx, move |cx: &mut AsyncWindowContext| {
                let mut cx = cx.clone();
                async move {
                    loop {
                        Timer::after(Duration::from_millis(16)).await;
                        let complete = state
                            .read()
                            .map(|state| state.reveal.is_complete(Instant::now()))
                            .unwrap_or(true);
                        if cx
                            .update(|_, cx| {
                                view.update(cx, |_view, view_cx| {
                                    view_cx.notify();
                                });
                            })
                            .is_err()
                        {
                            return;
                        }
                        if complete {
                            return;
                        }
                    }
                }
            })
            .detach();
    }
}

impl<T: Sample + Clone + 'static> Render for GpuiChartView<T> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.ensure_reveal(window, cx);

        let data = Arc::clone(&self.data);
        let state = Arc::clone(&self.state);
        let theme = self.theme.clone();
        let background = to_hsla(theme.background);

        div()
            .size_full()
            .bg(background)
            .child(
                canvas(
                    move |bounds, _window, _cx| {
                        let data = data.read().expect("chart data lock");
                        let mut state = state.write().expect("chart state lock");
                        let layout = ChartLayout {
                            origin: ScreenPoint::new(
                                f32::from(bounds.origin.x),
                                f32::from(bounds.origin.y),
                            ),
                            size: ScreenSize::new(
                                f32::from(bounds.size.width),
                                f32::from(bounds.size.height),
                            ),
                        };
                        state.layout = Some(layout);
                        let reveal = state.reveal.progress(Instant::now());
                        compose_frame(&data, layout.size, &state.scrub, reveal, &theme)
                    },
                    move |bounds, frame, window, _cx| {
                        paint_frame(&frame, bounds.origin, window);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

/// A handle for mutating the [`ChartData`] held inside a `GpuiChartView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct ChartHandle<T> {
    data: Arc<RwLock<ChartData<T>>>,
}

impl<T: Sample> ChartHandle<T> {
    /// Read the chart data.
    ///
    /// The data is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&ChartData<T>) -> R) -> R {
        let data = self.data.read().expect("chart data lock");
        f(&data)
    }

    /// Mutate the chart data.
    ///
    /// The data is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut ChartData<T>) -> R) -> R {
        let mut data = self.data.write().expect("chart data lock");
        f(&mut data)
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
