use tracing::{debug, info};

use crate::animation::Transition;
use crate::core::{DomainPadding, FieldDef, LinearScale, PlotArea, Record, Viewport};
use crate::core::{baseline_domain, padded_domain};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{AxisSelection, SelectionOutcome, TooltipState};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::ChartEngineConfig;

const AXIS_STROKE_WIDTH: f64 = 1.0;
const TICK_LENGTH_PX: f64 = 6.0;

/// One record's resolved position in plot-area coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPosition {
    pub x: f64,
    pub y: f64,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset, the axis-selection state machine, both
/// scale mappings, tooltip state, and at most one in-flight transition.
/// Host event adapters stay thin: a label click maps to `select_field`, a
/// point click to `show_tooltip`, pointer exit to `hide_tooltip`, and a
/// window resize to `resize`.
#[derive(Debug)]
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    plot: PlotArea,
    fields: Vec<FieldDef>,
    vertical: FieldDef,
    records: Vec<Record>,
    padding: DomainPadding,
    selection: AxisSelection,
    x_scale: LinearScale,
    y_scale: LinearScale,
    tooltip: TooltipState,
    transition: Option<Transition>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds the chart from a validated dataset.
    ///
    /// Fails when any record lacks a finite value for a selectable field or
    /// the fixed vertical field; the data loader is expected to have
    /// rejected such rows already.
    pub fn new(
        renderer: R,
        config: ChartEngineConfig,
        fields: Vec<FieldDef>,
        vertical: FieldDef,
        default_field: &str,
        records: Vec<Record>,
    ) -> ChartResult<Self> {
        config.validate()?;
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "chart requires at least one record".to_owned(),
            ));
        }
        for record in &records {
            if record.abbr.is_empty() {
                return Err(ChartError::InvalidData(
                    "record abbreviation must not be empty".to_owned(),
                ));
            }
            for field in &fields {
                record.value(&field.key)?;
            }
            record.value(&vertical.key)?;
        }

        let plot = PlotArea::from_viewport(config.viewport, config.margins)?;
        let keys = fields.iter().map(|field| field.key.clone()).collect();
        let selection = AxisSelection::new(keys, default_field)?;
        let padding = DomainPadding::default();

        let x_domain = padded_domain(&records, selection.active(), padding)?;
        let y_domain = baseline_domain(&records, &vertical.key, padding.upper_factor)?;
        let x_scale = LinearScale::new(x_domain, (0.0, plot.width))?;
        let y_scale = LinearScale::new(y_domain, (plot.height, 0.0))?;

        info!(
            records = records.len(),
            active = selection.active(),
            "chart initialized"
        );

        Ok(Self {
            renderer,
            config,
            plot,
            fields,
            vertical,
            records,
            padding,
            selection,
            x_scale,
            y_scale,
            tooltip: TooltipState::default(),
            transition: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn active_field(&self) -> &str {
        self.selection.active()
    }

    #[must_use]
    pub fn horizontal_domain(&self) -> (f64, f64) {
        self.x_scale.domain()
    }

    #[must_use]
    pub fn vertical_domain(&self) -> (f64, f64) {
        self.y_scale.domain()
    }

    /// Axis label states in declaration order, `(field, is_active)`.
    pub fn axis_labels(&self) -> impl Iterator<Item = (&FieldDef, bool)> {
        self.fields
            .iter()
            .map(|field| (field, self.selection.is_active(&field.key)))
    }

    /// Applies a label click: the already-active field is a no-op; an
    /// inactive field recomputes the horizontal domain, replaces the scale
    /// domain in place, swaps label activity, and starts a transition that
    /// overrides any in-flight one (last-write-wins on target coordinates).
    pub fn select_field(&mut self, field: &str) -> ChartResult<SelectionOutcome> {
        if !self.selection.contains(field) {
            return Err(ChartError::UnknownField(field.to_owned()));
        }
        if self.selection.is_active(field) {
            return Ok(SelectionOutcome::AlreadyActive);
        }

        let domain = padded_domain(&self.records, field, self.padding)?;
        let point_start = self.horizontal_positions()?;
        let old_scale = self.x_scale;

        let outcome = self.selection.select(field)?;
        self.x_scale.set_domain(domain)?;

        let point_target = self.horizontal_positions()?;
        let tick_values = self.x_scale.ticks(self.config.tick_count);
        let mut tick_start = Vec::with_capacity(tick_values.len());
        let mut tick_target = Vec::with_capacity(tick_values.len());
        for value in &tick_values {
            // Incoming ticks slide in from where their domain value sat
            // under the previous mapping, d3-style.
            tick_start.push(old_scale.to_pixel(*value)?);
            tick_target.push(self.x_scale.to_pixel(*value)?);
        }

        self.transition = Some(Transition::new(
            point_start,
            point_target,
            tick_values.to_vec(),
            tick_start,
            tick_target,
            self.config.transition_duration_ms,
        )?);

        debug!(field, domain = ?domain, "horizontal axis switched");
        Ok(outcome)
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Settled positions under the current scales.
    pub fn point_positions(&self) -> ChartResult<Vec<PointPosition>> {
        let mut positions = Vec::with_capacity(self.records.len());
        for record in &self.records {
            positions.push(PointPosition {
                x: self.x_scale.to_pixel(record.value(self.selection.active())?)?,
                y: self.y_scale.to_pixel(record.value(&self.vertical.key)?)?,
            });
        }
        Ok(positions)
    }

    /// Transition-aware positions for one animation frame. Vertical
    /// coordinates never change during an axis switch.
    pub fn positions_at(&self, elapsed_ms: f64) -> ChartResult<Vec<PointPosition>> {
        let settled = self.point_positions()?;
        let Some(transition) = &self.transition else {
            return Ok(settled);
        };
        if transition.is_complete(elapsed_ms) {
            return Ok(settled);
        }

        let sample = transition.sample(elapsed_ms);
        Ok(sample
            .point_x
            .iter()
            .zip(&settled)
            .map(|(x, settled)| PointPosition {
                x: *x,
                y: settled.y,
            })
            .collect())
    }

    pub fn show_tooltip(&mut self, record_index: usize) -> ChartResult<()> {
        if record_index >= self.records.len() {
            return Err(ChartError::InvalidData(format!(
                "tooltip record index {record_index} out of bounds"
            )));
        }
        self.tooltip.show_for(record_index);
        Ok(())
    }

    pub fn hide_tooltip(&mut self) {
        self.tooltip.hide();
    }

    #[must_use]
    pub fn visible_tooltip(&self) -> Option<usize> {
        self.tooltip.visible_record()
    }

    /// Tooltip text for one record: the active field's display label and
    /// value, then the fixed vertical field's, one per line.
    pub fn tooltip_content(&self, record_index: usize) -> ChartResult<String> {
        let record = self.records.get(record_index).ok_or_else(|| {
            ChartError::InvalidData(format!("tooltip record index {record_index} out of bounds"))
        })?;
        let active = self.field_def(self.selection.active())?;

        Ok(format!(
            "{}: {}\n{}: {}",
            active.label,
            format_value(record.value(&active.key)?),
            self.vertical.label,
            format_value(record.value(&self.vertical.key)?),
        ))
    }

    /// Discards the rendered chart and rebuilds it at the new dimensions.
    ///
    /// No state survives a resize: the active field returns to the default,
    /// any in-flight transition is aborted, and the tooltip is hidden.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let plot = PlotArea::from_viewport(viewport, self.config.margins)?;
        self.config.viewport = viewport;
        self.plot = plot;
        self.selection.reset();

        let x_domain = padded_domain(&self.records, self.selection.active(), self.padding)?;
        let y_domain =
            baseline_domain(&self.records, &self.vertical.key, self.padding.upper_factor)?;
        self.x_scale = LinearScale::new(x_domain, (0.0, plot.width))?;
        self.y_scale = LinearScale::new(y_domain, (plot.height, 0.0))?;
        self.transition = None;
        self.tooltip.hide();

        info!(
            width = viewport.width,
            height = viewport.height,
            "chart rebuilt at new viewport"
        );
        Ok(())
    }

    /// Renders the settled chart state.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame(None)?;
        self.renderer.render(&frame)
    }

    /// Renders one animation frame, sampling any in-flight transition at
    /// `elapsed_ms` since the transition started.
    pub fn render_at(&mut self, elapsed_ms: f64) -> ChartResult<()> {
        let frame = self.build_frame(Some(elapsed_ms))?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn field_def(&self, key: &str) -> ChartResult<&FieldDef> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .ok_or_else(|| ChartError::UnknownField(key.to_owned()))
    }

    fn horizontal_positions(&self) -> ChartResult<Vec<f64>> {
        let mut positions = Vec::with_capacity(self.records.len());
        for record in &self.records {
            positions.push(self.x_scale.to_pixel(record.value(self.selection.active())?)?);
        }
        Ok(positions)
    }

    fn build_frame(&self, elapsed_ms: Option<f64>) -> ChartResult<RenderFrame> {
        let margins = self.config.margins;
        let offset_x = margins.left;
        let offset_y = margins.top;
        let mut frame = RenderFrame::new(self.config.viewport);

        // Axis baselines.
        frame = frame
            .with_line(LinePrimitive::new(
                offset_x,
                offset_y + self.plot.height,
                offset_x + self.plot.width,
                offset_y + self.plot.height,
                AXIS_STROKE_WIDTH,
                Color::BLACK,
            ))
            .with_line(LinePrimitive::new(
                offset_x,
                offset_y,
                offset_x,
                offset_y + self.plot.height,
                AXIS_STROKE_WIDTH,
                Color::BLACK,
            ));

        // Horizontal ticks, animated mid-transition.
        let (tick_values, tick_x): (Vec<f64>, Vec<f64>) = match (&self.transition, elapsed_ms) {
            (Some(transition), Some(elapsed)) if !transition.is_complete(elapsed) => {
                let sample = transition.sample(elapsed);
                (transition.tick_values().to_vec(), sample.tick_x)
            }
            _ => {
                let values = self.x_scale.ticks(self.config.tick_count);
                let mut pixels = Vec::with_capacity(values.len());
                for value in &values {
                    pixels.push(self.x_scale.to_pixel(*value)?);
                }
                (values.to_vec(), pixels)
            }
        };
        for (value, x) in tick_values.iter().zip(&tick_x) {
            // Entering ticks can sit outside the plot while sliding in.
            if *x < -0.5 || *x > self.plot.width + 0.5 {
                continue;
            }
            let tick_x_px = offset_x + x;
            let base_y = offset_y + self.plot.height;
            frame = frame
                .with_line(LinePrimitive::new(
                    tick_x_px,
                    base_y,
                    tick_x_px,
                    base_y + TICK_LENGTH_PX,
                    AXIS_STROKE_WIDTH,
                    Color::BLACK,
                ))
                .with_text(TextPrimitive::new(
                    format_value(*value),
                    tick_x_px,
                    base_y + TICK_LENGTH_PX + 12.0,
                    self.config.label_font_size_px,
                    Color::BLACK,
                    TextHAlign::Center,
                ));
        }

        // Vertical ticks are domain-invariant.
        for value in self.y_scale.ticks(self.config.tick_count) {
            let tick_y_px = offset_y + self.y_scale.to_pixel(value)?;
            frame = frame
                .with_line(LinePrimitive::new(
                    offset_x - TICK_LENGTH_PX,
                    tick_y_px,
                    offset_x,
                    tick_y_px,
                    AXIS_STROKE_WIDTH,
                    Color::BLACK,
                ))
                .with_text(TextPrimitive::new(
                    format_value(value),
                    offset_x - TICK_LENGTH_PX - 4.0,
                    tick_y_px + 4.0,
                    self.config.label_font_size_px,
                    Color::BLACK,
                    TextHAlign::Right,
                ));
        }

        // Data markers and abbreviation labels.
        let positions = match elapsed_ms {
            Some(elapsed) => self.positions_at(elapsed)?,
            None => self.point_positions()?,
        };
        for (record, position) in self.records.iter().zip(&positions) {
            let cx = offset_x + position.x;
            let cy = offset_y + position.y;
            frame = frame
                .with_circle(CirclePrimitive::new(
                    cx,
                    cy,
                    self.config.point_radius,
                    self.config.point_fill,
                ))
                .with_text(TextPrimitive::new(
                    record.abbr.clone(),
                    cx,
                    cy + self.config.label_font_size_px / 2.0,
                    self.config.label_font_size_px,
                    Color::BLACK,
                    TextHAlign::Center,
                ));
        }

        // Selectable horizontal-axis labels, stacked below the axis; the
        // active one renders solid, the rest dimmed.
        for (index, (field, is_active)) in self.axis_labels().enumerate() {
            let color = if is_active {
                Color::BLACK
            } else {
                Color::INACTIVE_GREY
            };
            frame = frame.with_text(TextPrimitive::new(
                field.label.clone(),
                offset_x + self.plot.width / 2.0,
                offset_y + self.plot.height + 40.0 + (index as f64) * 25.0,
                self.config.axis_font_size_px,
                color,
                TextHAlign::Center,
            ));
        }

        // Fixed vertical-axis title, rotated along the left margin.
        frame = frame.with_text(
            TextPrimitive::new(
                self.vertical.label.clone(),
                margins.left - 60.0,
                offset_y + self.plot.height / 2.0,
                self.config.axis_font_size_px,
                Color::BLACK,
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        );

        // Tooltip for the clicked point, anchored above the marker.
        if let Some(record_index) = self.tooltip.visible_record() {
            let anchor = positions.get(record_index).ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "tooltip record index {record_index} out of bounds"
                ))
            })?;
            let content = self.tooltip_content(record_index)?;
            let line_count = content.lines().count();
            for (line_index, line) in content.lines().enumerate() {
                let lines_below = (line_count - 1 - line_index) as f64;
                frame = frame.with_text(TextPrimitive::new(
                    line.to_owned(),
                    offset_x + anchor.x,
                    offset_y + anchor.y
                        - self.config.point_radius
                        - 6.0
                        - lines_below * (self.config.label_font_size_px + 2.0),
                    self.config.label_font_size_px,
                    Color::BLACK,
                    TextHAlign::Center,
                ));
            }
        }

        Ok(frame)
    }
}

/// Axis and tooltip value formatting: whole numbers drop the fraction,
/// everything else keeps one decimal place.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
