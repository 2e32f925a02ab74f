//! Editing operations that touch the tool session, store and history together.
//!
//! Systems build an [`AnnotationEditor`] from [`EditorState`](super::params::EditorState)
//! and a [`Commands`]; tests build one over a bare [`World`].

use bevy::prelude::*;

use super::annotations::{AnnotationStore, StoreSnapshot};
use super::drawables::SceneContainer;
use super::history::{CommandHistory, HistoryAction, execute_redo, execute_undo};
use super::tools::{AnnotationMode, CompletedShape, PickOutcome, ToolSession};

pub struct AnnotationEditor<'a, S: SceneContainer> {
    pub session: &'a mut ToolSession,
    pub store: &'a mut AnnotationStore,
    pub history: &'a mut CommandHistory,
    pub scene: &'a mut S,
}

impl<S: SceneContainer> AnnotationEditor<'_, S> {
    pub fn set_mode(&mut self, mode: AnnotationMode) {
        self.session.set_mode(mode, self.scene);
    }

    /// Feed a picked world point to the active tool, committing any finished shape
    pub fn pick(&mut self, point: Vec3) -> PickOutcome {
        let outcome = self.session.handle_pick(point, self.scene);

        if let PickOutcome::Completed(shape) = &outcome {
            let action = match shape.clone() {
                CompletedShape::Measurement(measurement) => {
                    let slot = self.store.add_measurement(self.scene, measurement);
                    info!("Measurement added: {} units", measurement.distance_label());
                    HistoryAction::Measure { measurement, slot }
                }
                CompletedShape::Polygon(polygon) => {
                    let slot = self.store.add_polygon(self.scene, polygon.clone());
                    info!("Polygon added with {} vertices", polygon.vertices().len());
                    HistoryAction::Polygon { polygon, slot }
                }
            };
            self.history.record(action);
        }

        outcome
    }

    /// Commit the pending annotation. Returns false if nothing was pending or the text is blank.
    pub fn confirm_annotation(&mut self, text: &str) -> bool {
        let Some(annotation) = self.session.confirm_annotation(text, self.scene) else {
            return false;
        };
        let slot = self.store.add_annotation(self.scene, annotation.clone());
        info!("Annotation added: {:?}", annotation.text());
        self.history.record(HistoryAction::Annotate { annotation, slot });
        true
    }

    pub fn cancel_annotation(&mut self) -> bool {
        self.session.cancel_annotation(self.scene)
    }

    /// Remove every entity. Recorded in history only when something was removed.
    pub fn clear_all(&mut self) -> bool {
        self.session.reset(self.scene);
        if self.store.is_empty() {
            debug!("Clear all: store already empty");
            return false;
        }
        let snapshot = self.store.clear_and_dispose(self.scene);
        info!("Cleared {} entities", snapshot.entity_count());
        self.history.record(HistoryAction::Clear { snapshot });
        true
    }

    pub fn undo(&mut self) -> bool {
        self.session.reset(self.scene);
        execute_undo(self.history, self.store, self.scene)
    }

    pub fn redo(&mut self) -> bool {
        self.session.reset(self.scene);
        execute_redo(self.history, self.store, self.scene)
    }

    /// Replace the store contents with imported data.
    ///
    /// Bypasses the history; earlier actions stay recorded as they were.
    pub fn replace_all(&mut self, snapshot: &StoreSnapshot) {
        self.session.reset(self.scene);
        let previous = self.store.clear_and_dispose(self.scene);
        self.store.restore(self.scene, snapshot);
        info!(
            "Replaced {} entities with {} imported",
            previous.entity_count(),
            snapshot.entity_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::editor::annotations::{Annotation, Measurement, Polygon};
    use crate::editor::drawables::Drawable;
    use crate::editor::params::EditorState;

    #[derive(Default)]
    struct Fixture {
        world: World,
        session: ToolSession,
        store: AnnotationStore,
        history: CommandHistory,
    }

    impl Fixture {
        fn editor(&mut self) -> AnnotationEditor<'_, World> {
            AnnotationEditor {
                session: &mut self.session,
                store: &mut self.store,
                history: &mut self.history,
                scene: &mut self.world,
            }
        }

        fn drawable_count(&mut self) -> usize {
            self.world.query::<&Drawable>().iter(&self.world).count()
        }
    }

    fn measure_pair(editor: &mut AnnotationEditor<'_, World>, a: Vec3, b: Vec3) {
        editor.set_mode(AnnotationMode::Measuring);
        editor.pick(a);
        editor.pick(b);
    }

    #[test]
    fn test_commits_are_recorded_and_fully_undoable() {
        let mut fx = Fixture::default();
        {
            let mut editor = fx.editor();
            measure_pair(&mut editor, Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));

            editor.set_mode(AnnotationMode::DrawingPolygon);
            for p in [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.1, 0.0, 0.0)] {
                editor.pick(p);
            }

            editor.set_mode(AnnotationMode::Annotating);
            assert_eq!(editor.pick(Vec3::Y), PickOutcome::AwaitingText);
            assert!(editor.confirm_annotation("Entrance"));
        }

        assert_eq!(fx.store.entity_count(), 3);
        assert_eq!(fx.history.len(), 3);
        assert_eq!(
            fx.store.measurements().next().map(Measurement::distance_label),
            Some("5.00".to_string())
        );
        assert_eq!(fx.drawable_count(), fx.store.drawable_count());

        {
            let mut editor = fx.editor();
            for _ in 0..3 {
                assert!(editor.undo());
            }
            assert!(!editor.undo());
        }
        assert!(fx.store.is_empty());
        assert_eq!(fx.drawable_count(), 0);
    }

    #[test]
    fn test_undo_retires_in_progress_points() {
        let mut fx = Fixture::default();
        {
            let mut editor = fx.editor();
            measure_pair(&mut editor, Vec3::ZERO, Vec3::X);
            editor.pick(Vec3::Y);
            assert!(editor.undo());
        }
        assert!(fx.session.in_progress_points().is_empty());
        assert_eq!(fx.drawable_count(), 0);
    }

    #[test]
    fn test_clear_all_on_empty_store_is_not_recorded() {
        let mut fx = Fixture::default();
        assert!(!fx.editor().clear_all());
        assert!(fx.history.is_empty());
    }

    #[test]
    fn test_clear_all_then_undo_restores() {
        let mut fx = Fixture::default();
        {
            let mut editor = fx.editor();
            measure_pair(&mut editor, Vec3::ZERO, Vec3::X);
            measure_pair(&mut editor, Vec3::ZERO, Vec3::Y);
            assert!(editor.clear_all());
        }
        assert!(fx.store.is_empty());
        assert_eq!(fx.drawable_count(), 0);

        assert!(fx.editor().undo());
        assert_eq!(fx.store.count(crate::editor::annotations::EntityKind::Measurement), 2);
        assert_eq!(fx.drawable_count(), 6);
    }

    #[test]
    fn test_replace_all_bypasses_history() {
        let mut fx = Fixture::default();
        measure_pair(&mut fx.editor(), Vec3::ZERO, Vec3::X);

        let imported = StoreSnapshot {
            measurements: vec![],
            polygons: vec![Polygon::new(vec![Vec3::ZERO, Vec3::X, Vec3::Z]).unwrap()],
            annotations: vec![Annotation::new(Vec3::Y, "Imported").unwrap()],
        };
        fx.editor().replace_all(&imported);

        assert_eq!(fx.store.snapshot(), imported);
        assert_eq!(fx.history.len(), 1);
        assert_eq!(fx.drawable_count(), fx.store.drawable_count());
    }

    #[test]
    fn test_blank_annotation_text_is_rejected() {
        let mut fx = Fixture::default();
        {
            let mut editor = fx.editor();
            editor.set_mode(AnnotationMode::Annotating);
            editor.pick(Vec3::Y);
            assert!(!editor.confirm_annotation("  "));
            assert!(editor.cancel_annotation());
        }
        assert!(fx.history.is_empty());
        assert_eq!(fx.drawable_count(), 0);
    }

    #[derive(Clone, Copy)]
    enum Step {
        Mode(AnnotationMode),
        Pick(Vec3),
        ClearAll,
        Undo,
        Redo,
    }

    #[derive(Resource, Default)]
    struct Script(VecDeque<Step>);

    fn run_next_step(mut commands: Commands, mut state: EditorState, mut script: ResMut<Script>) {
        let Some(step) = script.0.pop_front() else {
            return;
        };
        let mut editor = state.editor(&mut commands);
        match step {
            Step::Mode(mode) => editor.set_mode(mode),
            Step::Pick(point) => {
                editor.pick(point);
            }
            Step::ClearAll => {
                editor.clear_all();
            }
            Step::Undo => {
                editor.undo();
            }
            Step::Redo => {
                editor.redo();
            }
        }
    }

    fn app_with_steps(steps: impl IntoIterator<Item = Step>) -> App {
        let mut app = App::new();
        app.init_resource::<ToolSession>()
            .init_resource::<AnnotationStore>()
            .init_resource::<CommandHistory>()
            .insert_resource(Script(steps.into_iter().collect()))
            .add_systems(Update, run_next_step);
        app
    }

    fn step(app: &mut App) -> usize {
        app.update();
        let world = app.world_mut();
        world.query::<&Drawable>().iter(world).count()
    }

    #[test]
    fn test_deferred_commands_across_frames_leave_no_drawables() {
        let mut app = app_with_steps([
            Step::Mode(AnnotationMode::Measuring),
            Step::Pick(Vec3::ZERO),
            Step::Pick(Vec3::new(3.0, 4.0, 0.0)),
            Step::ClearAll,
            Step::Undo,
            Step::Undo,
            Step::Redo,
            Step::Redo,
            Step::Undo,
            Step::Undo,
        ]);

        assert_eq!(step(&mut app), 0);
        // First point shows a transient marker
        assert_eq!(step(&mut app), 1);
        assert_eq!(step(&mut app), 3);
        // Clear, then undo the clear
        assert_eq!(step(&mut app), 0);
        assert_eq!(step(&mut app), 3);
        // Undo the measurement, redo it, redo the clear
        assert_eq!(step(&mut app), 0);
        assert_eq!(step(&mut app), 3);
        assert_eq!(step(&mut app), 0);
        // Undo the clear, undo the measurement
        assert_eq!(step(&mut app), 3);
        assert_eq!(step(&mut app), 0);

        let store = app.world().resource::<AnnotationStore>();
        assert!(store.is_empty());
        assert_eq!(store.drawable_count(), 0);
        let history = app.world().resource::<CommandHistory>();
        assert_eq!(history.index(), None);
        assert_eq!(history.redo_count(), 2);
    }
}
