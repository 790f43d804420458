use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use druid::{AppLauncher, Application, Widget, WindowDesc};
use log::{error, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_druid::Plot;
use serde::Serialize;

use crate::consts::{
    LABEL_SINGLE_THREAD, LABEL_WORKER_THREAD_PREFIX, LINE_WIDTH, WINDOW_SIZE, WINDOW_TITLE,
    X_AXIS_DESC, Y_AXIS_DESC,
};
use crate::error::VisualizerError;
use crate::exec_time::RunTimings;
use crate::palette::{NamedColor, Palette};
use crate::run_reader::{ResultSet, RunId};

/// A single labelled series, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub label: String,
    pub color: NamedColor,
    pub points: Vec<(i64, i64)>,
}

/// Everything the chart window needs, computed before the window is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub caption: String,
    pub lines: Vec<ChartLine>,
    x_range: Range<i64>,
    y_range: Range<i64>,
}

#[derive(Serialize)]
struct LabeledSeries<'a> {
    label: String,
    values: &'a [i64],
}

/// The last series is the sequential run, every other one belongs to the worker at its index.
pub fn series_label(index: usize, total: usize) -> String {
    if index + 1 == total {
        LABEL_SINGLE_THREAD.to_string()
    } else {
        format!("{LABEL_WORKER_THREAD_PREFIX} {index}")
    }
}

pub fn caption(run: RunId, timings: &RunTimings) -> String {
    if timings.is_empty() {
        run.to_string()
    } else {
        format!("{run} ({timings})")
    }
}

/// Serializes the results with their labels, e.g. `[{"label":"Worker Thread 0","values":[...]}]`.
pub fn history_as_json(results: &ResultSet) -> Result<String, VisualizerError> {
    let total = results.len();
    let labeled = results
        .series()
        .iter()
        .enumerate()
        .map(|(idx, values)| LabeledSeries {
            label: series_label(idx, total),
            values,
        })
        .collect::<Vec<LabeledSeries>>();
    Ok(serde_json::to_string(&labeled)?)
}

impl Chart {
    /// Pairs every series with the palette color at its index.
    pub fn build(
        results: &ResultSet,
        palette: &Palette,
        caption: String,
    ) -> Result<Self, VisualizerError> {
        let total = results.len();
        if total > palette.len() {
            return Err(VisualizerError::PaletteExhausted {
                series: total,
                colors: palette.len(),
            });
        }

        let mut lines = Vec::with_capacity(total);
        for (idx, values) in results.series().iter().enumerate() {
            let color = *palette.get(idx).ok_or(VisualizerError::PaletteExhausted {
                series: total,
                colors: palette.len(),
            })?;
            lines.push(ChartLine {
                label: series_label(idx, total),
                color,
                points: values
                    .iter()
                    .enumerate()
                    .map(|(x, &y)| (x as i64, y))
                    .collect(),
            });
        }

        let longest = results.series().iter().map(Vec::len).max().unwrap_or(0) as i64;
        let x_range = 0..(longest - 1).max(1);

        let all_values = || results.series().iter().flatten().copied();
        let y_range = match (all_values().min(), all_values().max()) {
            (Some(min), Some(max)) => {
                // the span of two i64 values only fits in an i128
                let margin = ((max as i128 - min as i128) / 20).max(1) as i64;
                min.saturating_sub(margin)..max.saturating_add(margin)
            }
            _ => 0..1,
        };

        Ok(Chart {
            caption,
            lines,
            x_range,
            y_range,
        })
    }

    pub fn x_range(&self) -> Range<i64> {
        self.x_range.clone()
    }

    pub fn y_range(&self) -> Range<i64> {
        self.y_range.clone()
    }
}

/// First error raised while drawing inside the window.
type DrawFailure = Rc<RefCell<Option<String>>>;

/// Opens the chart window and blocks until it is closed.
/// A failed draw closes the window and is returned as [`VisualizerError::Display`].
pub fn render_plot(chart: Chart) -> Result<(), VisualizerError> {
    info!("Displaying {} series for {}", chart.lines.len(), chart.caption);
    let failure: DrawFailure = Rc::new(RefCell::new(None));
    let widget_failure = Rc::clone(&failure);
    let main_window = WindowDesc::new(move || chart_builder(chart, widget_failure))
        .title(WINDOW_TITLE)
        .window_size(WINDOW_SIZE)
        .resizable(true);

    AppLauncher::with_window(main_window)
        .launch(())
        .map_err(|e| VisualizerError::Display(e.to_string()))?;

    take_draw_failure(&failure)
}

fn chart_builder(chart: Chart, failure: DrawFailure) -> impl Widget<()> {
    Plot::new(move |_size, _data, root| {
        let failed_before = failure.borrow().is_some();
        if !failed_before && !draw_or_record(&chart, root, &failure) {
            Application::global().quit();
        }
    })
}

/// Draws the chart, keeping the error in `failure` when drawing fails.
fn draw_or_record<DB: DrawingBackend>(
    chart: &Chart,
    root: &DrawingArea<DB, Shift>,
    failure: &DrawFailure,
) -> bool {
    match draw_chart(chart, root) {
        Ok(()) => true,
        Err(e) => {
            error!("Unable to draw the chart: {:?}", e);
            *failure.borrow_mut() = Some(format!("{:?}", e));
            false
        }
    }
}

fn take_draw_failure(failure: &DrawFailure) -> Result<(), VisualizerError> {
    let message = failure.borrow_mut().take();
    match message {
        Some(message) => Err(VisualizerError::Display(message)),
        None => Ok(()),
    }
}

/// Draws the lines in order, so later series end up on top of earlier ones.
pub fn draw_chart<DB: DrawingBackend>(
    chart: &Chart,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart_context = ChartBuilder::on(root)
        .caption(&chart.caption, ("sans-serif", 24))
        .margin(20)
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d(chart.x_range(), chart.y_range())?;

    chart_context
        .configure_mesh()
        .x_desc(X_AXIS_DESC)
        .y_desc(Y_AXIS_DESC)
        .draw()?;

    for line in chart.lines.iter() {
        let color = line.color.rgb();
        chart_context
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                color.stroke_width(LINE_WIDTH),
            ))?
            .label(line.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });
    }

    chart_context
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
