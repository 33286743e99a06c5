//! Layout passes: schematic and fallback.

use crate::circuit::{CircuitData, Element, Resistor, ResistorRegistry};

use super::geometry::{
    Caption, CaptionKind, Layout, LayoutMode, Point, Primitive, ResistorSymbol, SourceSymbol, Wire,
};
use super::LayoutConfig;

/// Lay out a circuit on a `width × height` canvas with the canonical parameters.
///
/// Pure and deterministic: identical inputs always yield identical layouts.
pub fn layout_circuit(circuit: &CircuitData, width: f64, height: f64) -> Layout {
    layout_with_config(circuit, width, height, &LayoutConfig::default())
}

/// Lay out a circuit with custom parameters.
///
/// Circuits without a topology get the fallback layout. Dangling resistor
/// references are skipped, never reported.
pub fn layout_with_config(
    circuit: &CircuitData,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> Layout {
    match circuit.topology() {
        Some(elements) => schematic(circuit, elements, width, height, config),
        None => fallback(circuit, width, height, config),
    }
}

/// Running state of the left-to-right schematic pass.
struct Placer<'c> {
    config: &'c LayoutConfig,
    scale: f64,
    /// Height of the main series wire
    wire_y: f64,
    primitives: Vec<Primitive>,
}

impl<'c> Placer<'c> {
    fn wire(&mut self, wire: Wire) {
        self.primitives.push(Primitive::Wire(wire));
    }

    fn resistor(&mut self, resistor: &Resistor, left: f64, center_y: f64) {
        let height = self.config.resistor_height;
        self.primitives.push(Primitive::Resistor(ResistorSymbol {
            resistor_id: resistor.id.clone(),
            label: resistor.label.clone(),
            value: resistor.value,
            origin: Point::new(left, center_y - height / 2.0),
            width: self.config.resistor_width * self.scale,
            height,
        }));
    }

    /// Lead, body, lead along the main wire.
    fn place_series(&mut self, resistor: &Resistor, x: f64, slot: f64) {
        let lead = self.config.lead_length * self.scale;
        let body = self.config.resistor_width * self.scale;
        let y = self.wire_y;

        self.wire(Wire::horizontal(x, x + lead, y));
        self.resistor(resistor, x + lead, y);
        self.wire(Wire::horizontal(x + lead + body, x + slot, y));
    }

    /// Bus bars bracketing the group, one lead-body-lead row per branch.
    fn place_parallel(&mut self, branches: &[&Resistor], x: f64, slot: f64) {
        let lead = self.config.lead_length * self.scale;
        let half_body = self.config.resistor_width * self.scale / 2.0;
        let y = self.wire_y;

        let end_x = x + slot;
        let mid_x = (x + end_x) / 2.0;
        let bus_left = x + lead;
        let bus_right = end_x - lead;

        // Branch spacing is fixed; only horizontal sizes follow the scale
        let span = self.config.parallel_span(branches.len());
        let top = y - span / 2.0;

        self.wire(Wire::vertical(bus_left, top, top + span));
        self.wire(Wire::vertical(bus_right, top, top + span));
        self.wire(Wire::horizontal(x, bus_left, y));
        self.wire(Wire::horizontal(bus_right, end_x, y));

        for (branch, resistor) in branches.iter().enumerate() {
            let branch_y = top + branch as f64 * self.config.parallel_spacing;
            self.wire(Wire::horizontal(bus_left, mid_x - half_body, branch_y));
            self.resistor(resistor, mid_x - half_body, branch_y);
            self.wire(Wire::horizontal(mid_x + half_body, bus_right, branch_y));
        }
    }

    /// Plain wire through a slot whose resistors could not be resolved.
    fn pass_through(&mut self, x: f64, slot: f64) {
        self.wire(Wire::horizontal(x, x + slot, self.wire_y));
    }
}

fn schematic(
    circuit: &CircuitData,
    elements: &[Element],
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> Layout {
    let registry = ResistorRegistry::for_circuit(circuit);

    let natural_width: f64 = elements.iter().map(|e| e.natural_width(config)).sum();
    let available = width - 2.0 * config.padding - config.source_reserve;
    let scale = LayoutConfig::fit_scale(natural_width, available);
    tracing::debug!(
        "Laying out {} elements: natural width {}, available {}, scale {}",
        elements.len(),
        natural_width,
        available,
        scale
    );

    let center_y = height / 2.0;
    let wire_y = center_y - config.rail_offset;
    let return_y = center_y + config.rail_offset;
    let source_x = config.padding + config.source_offset;
    let right_x = width - config.padding;

    let mut placer = Placer {
        config,
        scale,
        wire_y,
        primitives: Vec::new(),
    };

    placer.primitives.push(Primitive::Source(SourceSymbol {
        center: Point::new(source_x, center_y),
        radius: config.source_radius,
        terminal_reach: config.rail_offset,
        voltage: circuit.voltage.value,
    }));

    let start_x = config.padding + config.source_lead;
    placer.wire(Wire::horizontal(source_x, start_x, wire_y));

    let mut cursor = start_x;
    for (index, element) in elements.iter().enumerate() {
        let slot = element.natural_width(config) * scale;

        match element {
            Element::Resistor { resistor_id } => match registry.resolve(resistor_id) {
                Some(resistor) => placer.place_series(resistor, cursor, slot),
                None => {
                    tracing::debug!("Element {}: skipping unknown resistor '{}'", index, resistor_id);
                    placer.pass_through(cursor, slot);
                }
            },
            Element::Parallel { resistor_ids } => {
                let branches = registry.resolve_element(element);
                if branches.len() < resistor_ids.len() {
                    tracing::debug!(
                        "Element {}: {} of {} parallel branches unresolved",
                        index,
                        resistor_ids.len() - branches.len(),
                        resistor_ids.len()
                    );
                }

                if branches.is_empty() {
                    placer.pass_through(cursor, slot);
                } else {
                    let reach = config.parallel_span(branches.len()) / 2.0 + config.resistor_height / 2.0;
                    if wire_y - reach < 0.0 {
                        tracing::warn!(
                            "Parallel group at element {} ({} branches) is taller than the canvas",
                            index,
                            branches.len()
                        );
                    }
                    placer.place_parallel(&branches, cursor, slot);
                }
            }
        }

        cursor += slot;
    }

    // Close the loop back into the source's negative terminal
    placer.wire(Wire::horizontal(cursor, right_x, wire_y));
    placer.wire(Wire::vertical(right_x, wire_y, return_y));
    placer.wire(Wire::horizontal(right_x, source_x, return_y));
    placer.wire(Wire::vertical(source_x, return_y, return_y - config.lead_length));

    let mut primitives = placer.primitives;
    if let Some(text) = &circuit.description {
        primitives.push(Primitive::Caption(Caption {
            kind: CaptionKind::Description,
            anchor: Point::new(width / 2.0, height - config.description_offset),
            text: text.clone(),
        }));
    }

    Layout {
        mode: LayoutMode::Schematic,
        width,
        height,
        scale,
        natural_width,
        consumed_width: cursor - start_x,
        primitives,
    }
}

fn fallback(circuit: &CircuitData, width: f64, height: f64, config: &LayoutConfig) -> Layout {
    tracing::debug!(
        "No layout for {} resistors, using the text fallback",
        circuit.resistors.len()
    );

    let center_y = height / 2.0;
    let column_x = width / 2.0 + config.fallback_column_offset;

    let mut primitives = vec![
        Primitive::Source(SourceSymbol {
            center: Point::new(config.fallback_padding + config.source_offset, center_y),
            radius: config.source_radius,
            terminal_reach: config.rail_offset,
            voltage: circuit.voltage.value,
        }),
        Primitive::Caption(Caption {
            kind: CaptionKind::Heading,
            anchor: Point::new(column_x, center_y - config.rail_offset),
            text: "Circuit".to_string(),
        }),
    ];

    let list_top = center_y - 5.0;
    primitives.extend(circuit.resistors.iter().enumerate().map(|(i, resistor)| {
        Primitive::Caption(Caption {
            kind: CaptionKind::Entry,
            anchor: Point::new(column_x, list_top + i as f64 * config.fallback_line_height),
            text: resistor.to_string(),
        })
    }));

    if let Some(text) = &circuit.description {
        primitives.push(Primitive::Caption(Caption {
            kind: CaptionKind::Description,
            anchor: Point::new(width / 2.0, height - config.fallback_description_offset),
            text: text.clone(),
        }));
    }

    Layout {
        mode: LayoutMode::Fallback,
        width,
        height,
        scale: 1.0,
        natural_width: 0.0,
        consumed_width: 0.0,
        primitives,
    }
}
