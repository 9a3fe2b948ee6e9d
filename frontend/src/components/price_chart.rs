use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{LoadState, Month, PriceBucket, PRICE_RANGES};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::StatusNote;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 300;
const BAR_COLOR: RGBColor = RGBColor(0x88, 0x84, 0xd8);
const LABEL_COLOR: RGBColor = RGBColor(102, 102, 102);

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    pub month: Month,
    pub buckets: Vec<PriceBucket>,
    pub status: LoadState,
}

/// Bar chart of item counts per price range, drawn with plotters on a canvas
pub struct PriceChart {
    canvas_ref: NodeRef,
}

impl Component for PriceChart {
    type Message = ();
    type Properties = PriceChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(&ctx.props().buckets);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="price-chart">
                <h3>{format!("Bar Chart Stats - {}", props.month)}</h3>
                <StatusNote status={props.status.clone()} loading_label="Loading chart data..." />
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="price-chart-canvas"
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                >
                    // Fallback content for browsers and readers without canvas
                    <ul class="price-chart-fallback">
                        {for props.buckets.iter().map(|bucket| html! {
                            <li key={bucket.price_range.clone()}>
                                {format!("{}: {}", bucket.price_range, bucket.count)}
                            </li>
                        })}
                    </ul>
                </canvas>
            </div>
        }
    }
}

impl PriceChart {
    fn draw_chart(&self, buckets: &[PriceBucket]) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let series = bar_series(buckets);
        let tallest = series.iter().map(|(_, count)| *count).max().unwrap_or(0);

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(50)
            .build_cartesian_2d(
                (0u32..PRICE_RANGES.len() as u32).into_segmented(),
                0u32..y_axis_ceiling(tallest),
            ) {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(PRICE_RANGES.len())
            .x_label_formatter(&segment_label)
            .x_desc("Price range")
            .y_desc("Items")
            .label_style(("sans-serif", 12, &LABEL_COLOR))
            .axis_style(&RGBColor(220, 220, 220))
            .bold_line_style(&RGBColor(235, 235, 235))
            .light_line_style(&RGBColor(248, 248, 248))
            .draw()
            .is_err()
        {
            return;
        }

        if chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_COLOR.filled())
                    .margin(8)
                    .data(series),
            )
            .is_err()
        {
            return;
        }

        let _ = root.present();
    }
}

/// `(bucket index, count)` pairs in label order
fn bar_series(buckets: &[PriceBucket]) -> Vec<(u32, u32)> {
    buckets
        .iter()
        .take(PRICE_RANGES.len())
        .enumerate()
        .map(|(index, bucket)| {
            (
                index as u32,
                u32::try_from(bucket.count).unwrap_or(u32::MAX),
            )
        })
        .collect()
}

/// Top of the count axis: a little headroom above the tallest bar, and a
/// visible axis even when every bucket is empty.
fn y_axis_ceiling(tallest: u32) -> u32 {
    tallest
        .saturating_add(tallest / 10)
        .saturating_add(1)
        .max(5)
}

fn segment_label(value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(index) => PRICE_RANGES
            .get(*index as usize)
            .map(|label| label.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
