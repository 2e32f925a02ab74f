//! Tool state machine: the active editing mode and its in-progress points.
//!
//! Each mode accumulates picked points into its own accumulator. Points that
//! do not yet form a shape are shown through transient drawables owned by the
//! session, never by the [`AnnotationStore`](super::annotations::AnnotationStore).

use bevy::prelude::*;

use super::annotations::{Annotation, Measurement, Polygon};
use super::drawables::{DrawableStyle, SceneContainer, dispose_all, spawn_marker, spawn_segment};
use crate::constants::{MIN_POLYGON_VERTICES, POLYGON_CLOSE_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationMode {
    #[default]
    Idle,
    Measuring,
    DrawingPolygon,
    Annotating,
}

impl AnnotationMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnnotationMode::Idle => "None",
            AnnotationMode::Measuring => "Measure",
            AnnotationMode::DrawingPolygon => "Polygon",
            AnnotationMode::Annotating => "Annotate",
        }
    }

    pub fn shortcut_label(&self) -> &'static str {
        match self {
            AnnotationMode::Idle => "Esc",
            AnnotationMode::Measuring => "M",
            AnnotationMode::DrawingPolygon => "P",
            AnnotationMode::Annotating => "A",
        }
    }

    /// Modes selectable from the toolbar
    pub fn all() -> &'static [AnnotationMode] {
        &[
            AnnotationMode::Measuring,
            AnnotationMode::DrawingPolygon,
            AnnotationMode::Annotating,
        ]
    }
}

/// Points picked so far plus the transient drawables showing them
#[derive(Debug, Default)]
struct PointAccumulator {
    points: Vec<Vec3>,
    transients: Vec<Entity>,
}

impl PointAccumulator {
    fn reset(&mut self, scene: &mut impl SceneContainer) {
        let missing = dispose_all(scene, self.transients.drain(..));
        if missing > 0 {
            warn!("{} transient drawables were already gone", missing);
        }
        self.points.clear();
    }
}

/// A picked point waiting for its annotation text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingAnnotation {
    pub position: Vec3,
    indicator: Entity,
}

/// A shape finished by a pick
#[derive(Debug, Clone, PartialEq)]
pub enum CompletedShape {
    Measurement(Measurement),
    Polygon(Polygon),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// The pick had no effect in the current state
    Ignored,
    /// The point was added to the active accumulator
    Accumulated,
    /// An annotation point was placed and text is now awaited
    AwaitingText,
    Completed(CompletedShape),
}

#[derive(Resource, Debug, Default)]
pub struct ToolSession {
    mode: AnnotationMode,
    measure: PointAccumulator,
    polygon: PointAccumulator,
    pending_annotation: Option<PendingAnnotation>,
}

impl ToolSession {
    pub fn mode(&self) -> AnnotationMode {
        self.mode
    }

    /// Switch modes. Every transition retires all in-progress state.
    pub fn set_mode(&mut self, mode: AnnotationMode, scene: &mut impl SceneContainer) {
        if self.mode == mode {
            return;
        }
        self.reset(scene);
        debug!("Annotation mode: {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// Drop all accumulated points, the pending annotation and their transients
    pub fn reset(&mut self, scene: &mut impl SceneContainer) {
        self.measure.reset(scene);
        self.polygon.reset(scene);
        self.cancel_annotation(scene);
    }

    pub fn handle_pick(&mut self, point: Vec3, scene: &mut impl SceneContainer) -> PickOutcome {
        match self.mode {
            AnnotationMode::Idle => PickOutcome::Ignored,
            AnnotationMode::Measuring => self.pick_measure(point, scene),
            AnnotationMode::DrawingPolygon => self.pick_polygon(point, scene),
            AnnotationMode::Annotating => self.pick_annotation(point, scene),
        }
    }

    fn pick_measure(&mut self, point: Vec3, scene: &mut impl SceneContainer) -> PickOutcome {
        let Some(&start) = self.measure.points.first() else {
            let marker = spawn_marker(scene, point, DrawableStyle::Measurement);
            self.measure.transients.push(marker);
            self.measure.points.push(point);
            return PickOutcome::Accumulated;
        };

        self.measure.reset(scene);
        PickOutcome::Completed(CompletedShape::Measurement(Measurement::new(start, point)))
    }

    fn pick_polygon(&mut self, point: Vec3, scene: &mut impl SceneContainer) -> PickOutcome {
        let points = &self.polygon.points;
        let closes = points.len() >= MIN_POLYGON_VERTICES
            && points[0].distance(point) < POLYGON_CLOSE_THRESHOLD;

        if closes {
            let vertices = std::mem::take(&mut self.polygon.points);
            self.polygon.reset(scene);
            return match Polygon::new(vertices) {
                Some(polygon) => PickOutcome::Completed(CompletedShape::Polygon(polygon)),
                None => PickOutcome::Ignored,
            };
        }

        let marker = spawn_marker(scene, point, DrawableStyle::Polygon);
        self.polygon.transients.push(marker);
        if let Some(&last) = self.polygon.points.last() {
            let edge = spawn_segment(scene, last, point, DrawableStyle::Polygon);
            self.polygon.transients.push(edge);
        }
        self.polygon.points.push(point);
        PickOutcome::Accumulated
    }

    fn pick_annotation(&mut self, point: Vec3, scene: &mut impl SceneContainer) -> PickOutcome {
        if self.pending_annotation.is_some() {
            return PickOutcome::Ignored;
        }
        let indicator = spawn_marker(scene, point, DrawableStyle::Annotation);
        self.pending_annotation = Some(PendingAnnotation {
            position: point,
            indicator,
        });
        PickOutcome::AwaitingText
    }

    /// Turn the pending point into an annotation.
    ///
    /// Blank text leaves the pending point in place and returns `None`.
    pub fn confirm_annotation(
        &mut self,
        text: &str,
        scene: &mut impl SceneContainer,
    ) -> Option<Annotation> {
        let pending = self.pending_annotation?;
        let annotation = Annotation::new(pending.position, text)?;
        self.pending_annotation = None;
        scene.remove_drawable(pending.indicator);
        Some(annotation)
    }

    /// Discard the pending point and its indicator. Returns false if nothing was pending.
    pub fn cancel_annotation(&mut self, scene: &mut impl SceneContainer) -> bool {
        let Some(pending) = self.pending_annotation.take() else {
            return false;
        };
        if !scene.remove_drawable(pending.indicator) {
            warn!("Pending annotation indicator {:?} was already gone", pending.indicator);
        }
        true
    }

    pub fn pending_annotation(&self) -> Option<&PendingAnnotation> {
        self.pending_annotation.as_ref()
    }

    pub fn is_awaiting_text(&self) -> bool {
        self.pending_annotation.is_some()
    }

    /// Points accumulated by the active mode
    pub fn in_progress_points(&self) -> &[Vec3] {
        match self.mode {
            AnnotationMode::Measuring => &self.measure.points,
            AnnotationMode::DrawingPolygon => &self.polygon.points,
            AnnotationMode::Idle | AnnotationMode::Annotating => &[],
        }
    }

    /// Number of transient drawables currently owned by the session
    #[cfg(test)]
    pub fn transient_count(&self) -> usize {
        self.measure.transients.len()
            + self.polygon.transients.len()
            + usize::from(self.pending_annotation.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::drawables::Drawable;

    fn drawable_count(world: &mut World) -> usize {
        world.query::<&Drawable>().iter(world).count()
    }

    fn session_in(mode: AnnotationMode, world: &mut World) -> ToolSession {
        let mut session = ToolSession::default();
        session.set_mode(mode, world);
        session
    }

    #[test]
    fn test_idle_ignores_picks() {
        let mut world = World::new();
        let mut session = ToolSession::default();
        assert_eq!(session.handle_pick(Vec3::ZERO, &mut world), PickOutcome::Ignored);
        assert_eq!(drawable_count(&mut world), 0);
    }

    #[test]
    fn test_measuring_completes_every_second_point() {
        let mut world = World::new();
        let mut session = session_in(AnnotationMode::Measuring, &mut world);

        assert_eq!(
            session.handle_pick(Vec3::ZERO, &mut world),
            PickOutcome::Accumulated
        );
        assert_eq!(session.transient_count(), 1);

        let outcome = session.handle_pick(Vec3::new(3.0, 4.0, 0.0), &mut world);
        let PickOutcome::Completed(CompletedShape::Measurement(measurement)) = outcome else {
            panic!("expected a measurement, got {outcome:?}");
        };
        assert_eq!(measurement.distance_label(), "5.00");
        assert!(session.in_progress_points().is_empty());
        assert_eq!(drawable_count(&mut world), 0);

        // The next point starts a fresh measurement
        assert_eq!(
            session.handle_pick(Vec3::X, &mut world),
            PickOutcome::Accumulated
        );
        assert_eq!(session.in_progress_points(), &[Vec3::X]);
    }

    #[test]
    fn test_polygon_closes_near_first_point() {
        let mut world = World::new();
        let mut session = session_in(AnnotationMode::DrawingPolygon, &mut world);

        for point in [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)] {
            assert_eq!(session.handle_pick(point, &mut world), PickOutcome::Accumulated);
        }
        // 3 markers and 2 connecting edges
        assert_eq!(session.transient_count(), 5);

        let outcome = session.handle_pick(Vec3::new(0.1, 0.0, 0.0), &mut world);
        let PickOutcome::Completed(CompletedShape::Polygon(polygon)) = outcome else {
            panic!("expected a polygon, got {outcome:?}");
        };
        assert_eq!(
            polygon.vertices(),
            &[Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)]
        );
        assert!(session.in_progress_points().is_empty());
        assert_eq!(session.transient_count(), 0);
        assert_eq!(drawable_count(&mut world), 0);
    }

    #[test]
    fn test_polygon_does_not_close_before_three_points() {
        let mut world = World::new();
        let mut session = session_in(AnnotationMode::DrawingPolygon, &mut world);

        session.handle_pick(Vec3::ZERO, &mut world);
        session.handle_pick(Vec3::X, &mut world);
        assert_eq!(
            session.handle_pick(Vec3::new(0.05, 0.0, 0.0), &mut world),
            PickOutcome::Accumulated
        );
        assert_eq!(session.in_progress_points().len(), 3);
    }

    #[test]
    fn test_polygon_far_point_is_appended() {
        let mut world = World::new();
        let mut session = session_in(AnnotationMode::DrawingPolygon, &mut world);

        for point in [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y] {
            assert_eq!(session.handle_pick(point, &mut world), PickOutcome::Accumulated);
        }
        assert_eq!(session.in_progress_points().len(), 4);
    }

    #[test]
    fn test_mode_change_retires_transients() {
        let mut world = World::new();
        let mut session = session_in(AnnotationMode::DrawingPolygon, &mut world);
        session.handle_pick(Vec3::ZERO, &mut world);
        session.handle_pick(Vec3::X, &mut world);
        assert_eq!(drawable_count(&mut world), 3);

        session.set_mode(AnnotationMode::Measuring, &mut world);
        assert_eq!(drawable_count(&mut world), 0);
        assert_eq!(session.transient_count(), 0);

        session.set_mode(AnnotationMode::DrawingPolygon, &mut world);
        assert!(session.in_progress_points().is_empty());
    }

    #[test]
    fn test_annotation_awaits_text_and_ignores_picks() {
        let mut world = World::new();
        let mut session = session_in(AnnotationMode::Annotating, &mut world);

        assert_eq!(
            session.handle_pick(Vec3::Y, &mut world),
            PickOutcome::AwaitingText
        );
        assert_eq!(session.handle_pick(Vec3::X, &mut world), PickOutcome::Ignored);
        assert_eq!(session.pending_annotation().unwrap().position, Vec3::Y);

        assert!(session.confirm_annotation("   ", &mut world).is_none());
        assert!(session.is_awaiting_text());

        let annotation = session.confirm_annotation("Door", &mut world).unwrap();
        assert_eq!(annotation.text(), "Door");
        assert_eq!(annotation.world_position(), Vec3::Y);
        assert!(!session.is_awaiting_text());
        assert_eq!(drawable_count(&mut world), 0);
    }

    #[test]
    fn test_cancel_annotation_discards_indicator() {
        let mut world = World::new();
        let mut session = session_in(AnnotationMode::Annotating, &mut world);
        session.handle_pick(Vec3::Y, &mut world);
        assert_eq!(drawable_count(&mut world), 1);

        assert!(session.cancel_annotation(&mut world));
        assert!(!session.cancel_annotation(&mut world));
        assert_eq!(drawable_count(&mut world), 0);
    }
}
