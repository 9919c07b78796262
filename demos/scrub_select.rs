use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_trendline::{ChartData, GpuiChartView, Sample, ValueFormatter};

#[derive(Clone, Debug)]
struct Expense {
    month: &'static str,
    amount: f64,
}

impl Sample for Expense {
    fn value(&self) -> f64 {
        self.amount
    }
}

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
            let expenses = [
                ("Jan", 820.0),
                ("Feb", 910.5),
                ("Mar", 745.25),
                ("Apr", 1020.0),
                ("May", 880.0),
                ("Jun", 990.75),
            ]
            .map(|(month, amount)| Expense { month, amount });

            let data = ChartData::from_samples(expenses).with_target(900.0);

            let view = GpuiChartView::new(data)
                .with_formatter(ValueFormatter::default())
                .on_select(|selection: Option<Expense>| match selection {
                    Some(expense) => {
                        println!("selected {}: $ {}", expense.month, expense.amount)
                    }
                    None => println!("selection cleared"),
                });
            cx.new(|_| view)
        })
        .unwrap();
    });
}
