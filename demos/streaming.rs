use std::time::Duration;

use gpui::{
    AppContext, Application, AsyncWindowContext, Bounds, Timer, WindowBounds, WindowOptions, px,
    size,
};

use gpui_trendline::{ChartData, ChartViewConfig, GpuiChartView, Theme};

fn main() {
    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(400.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |window, cx| {
            let data = ChartData::from_samples([50.0, 52.0]).with_target(60.0);

            let config = ChartViewConfig {
                skip_reveal: true,
                ..Default::default()
            };
            let view = GpuiChartView::with_config(data, config).with_theme(Theme::dark());
            let chart_handle = view.chart_handle();
            let view_handle = cx.new(|_| view);

            let view_for_task = view_handle.clone();
            window
                .spawn(cx, move |cx: &mut AsyncWindowContext| {
                    let mut cx = cx.clone();
                    async move {
                        let mut phase = 0.0_f64;
                        loop {
                            Timer::after(Duration::from_millis(250)).await;
                            phase += 0.4;
                            let sample = 55.0 + 10.0 * phase.sin() + 2.0 * (phase * 3.1).cos();
                            cx.update(|_, cx| {
                                view_for_task.update(cx, |_view, view_cx| {
                                    chart_handle.write(|data| data.push(sample));
                                    view_cx.notify();
                                });
                            })
                            .ok();
                        }
                    }
                })
                .detach();

            view_handle
        })
        .unwrap();
    });
}
