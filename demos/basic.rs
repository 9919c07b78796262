use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_trendline::{ChartData, GpuiChartView, Theme};

fn main() {
    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(640.0), px(360.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let spending = [
                72.0, 81.0, 64.0, 90.0, 104.0, 88.0, 96.0, 120.0, 110.0, 98.0, 132.0, 126.0,
            ];
            let data = ChartData::from_samples(spending).with_target(100.0);

            let view = GpuiChartView::new(data).with_theme(Theme::dark());
            cx.new(|_| view)
        })
        .unwrap();
    });
}
