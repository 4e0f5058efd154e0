use log::{debug, warn};

use super::animator::{Frame, FrameToken, ReturnAnimation};
use super::geometry::{GateElement, Layout, Vec2};
use super::transform::{map_offset, Pose};
use super::GateConfig;

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Dragging { grab: Vec2, over_scanner: bool },
    Returning(ReturnAnimation),
    Unlocked,
}

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No gesture was in progress.
    Ignored,
    /// The card was over the scanner. The host should unlock.
    Unlock,
    /// The card missed. Drive [`GateController::advance`] with this token
    /// once per animation frame until it reports [`FrameStep::Settled`].
    Return(FrameToken),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    Continue(Pose),
    Settled,
    /// The token belongs to a cancelled or finished animation.
    Stale,
}

/// Owns the card's pose and the gesture state machine. Every write to the
/// pose goes through here, either from pointer input or from an animation
/// frame holding the current token.
#[derive(Debug, Clone)]
pub struct GateController {
    config: GateConfig,
    phase: Phase,
    pose: Pose,
    next_token: u64,
}

impl Default for GateController {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

impl GateController {
    /// An invalid `config` is logged and replaced by the defaults.
    pub fn new(config: GateConfig) -> Self {
        let config = config.validate().unwrap_or_else(|e| {
            warn!("ignoring gate config: {e}");
            GateConfig::default()
        });
        Self {
            config,
            phase: Phase::Idle,
            pose: Pose::REST,
            next_token: 0,
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Only ever true mid-drag.
    pub fn is_over_scanner(&self) -> bool {
        matches!(
            self.phase,
            Phase::Dragging {
                over_scanner: true,
                ..
            }
        )
    }

    pub fn is_returning(&self) -> bool {
        matches!(self.phase, Phase::Returning(_))
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self.phase, Phase::Unlocked)
    }

    /// Token of the return animation in flight, if any.
    pub fn active_animation(&self) -> Option<FrameToken> {
        match &self.phase {
            Phase::Returning(anim) => Some(anim.token()),
            _ => None,
        }
    }

    /// Starts a gesture at `pointer` (screen coordinates).
    ///
    /// Returns the token of a return animation this interrupted, so the host
    /// can cancel its scheduled frame. The card keeps its current position
    /// and the grab point is measured from the card's current center.
    ///
    /// Interrupting a return animation therefore does not snap the offset
    /// back to zero: the new drag starts from wherever the animation left
    /// the card. From rest the two are the same.
    pub fn pointer_down(&mut self, pointer: Vec2, layout: &impl Layout) -> Option<FrameToken> {
        if self.is_dragging() {
            return None;
        }
        let cancelled = self.active_animation();
        if let Some(token) = cancelled {
            debug!("gesture interrupted return animation {:?}", token);
        }

        let grab = match layout.bounds_of(GateElement::Card) {
            Ok(card) => pointer - card.center(),
            Err(e) => {
                debug!("no grab point: {e}");
                Vec2::ZERO
            }
        };
        if let Ok(container) = layout.bounds_of(GateElement::Container) {
            self.pose = map_offset(&self.config, self.pose.position, &container);
        }
        self.phase = Phase::Dragging {
            grab,
            over_scanner: false,
        };
        debug!("gesture started, grab point {:?}", grab);
        cancelled
    }

    /// Tracks the pointer and re-tests the scanner zone. Returns false when
    /// nothing changed (no gesture, or the container is not laid out).
    pub fn pointer_move(&mut self, pointer: Vec2, layout: &impl Layout) -> bool {
        let Phase::Dragging { grab, .. } = self.phase else {
            return false;
        };
        let Ok(container) = layout.bounds_of(GateElement::Container) else {
            return false;
        };

        self.pose = map_offset(&self.config, pointer - container.center() - grab, &container);

        let over_scanner = match (
            layout.bounds_of(GateElement::Card),
            layout.bounds_of(GateElement::Scanner),
        ) {
            (Ok(card), Ok(scanner)) => card.overlaps(&scanner),
            _ => false,
        };
        self.phase = Phase::Dragging { grab, over_scanner };
        true
    }

    /// Resolves the gesture. `now` is the host clock in milliseconds and
    /// anchors the return animation.
    pub fn pointer_up(&mut self, now: f64) -> Release {
        let Phase::Dragging { over_scanner, .. } = self.phase else {
            return Release::Ignored;
        };

        if over_scanner {
            debug!("card released over scanner");
            self.phase = Phase::Unlocked;
            return Release::Unlock;
        }

        let token = FrameToken(self.next_token);
        self.next_token += 1;
        debug!("card released at {:?}, returning", self.pose.position);
        self.phase = Phase::Returning(ReturnAnimation::new(
            self.pose,
            now,
            self.config.return_duration_ms,
            token,
        ));
        Release::Return(token)
    }

    /// One animation frame. Frames carrying a stale token write nothing.
    pub fn advance(&mut self, token: FrameToken, now: f64) -> FrameStep {
        let Phase::Returning(anim) = &self.phase else {
            debug!("dropping frame for {:?}, no animation running", token);
            return FrameStep::Stale;
        };
        if anim.token() != token {
            debug!("dropping frame for superseded {:?}", token);
            return FrameStep::Stale;
        }
        match anim.sample(now) {
            Frame::InFlight(pose) => {
                self.pose = pose;
                FrameStep::Continue(pose)
            }
            Frame::Settled => {
                debug!("card settled");
                self.pose = Pose::REST;
                self.phase = Phase::Idle;
                FrameStep::Settled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::geometry::{LayoutError, Rect};

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);
    // card rests centered in the container
    const CARD_REST: Rect = Rect::new(340.0, 304.0, 660.0, 496.0);
    const SCANNER: Rect = Rect::new(340.0, 560.0, 660.0, 752.0);

    struct FakeLayout {
        container: Option<Rect>,
        card: Option<Rect>,
        scanner: Option<Rect>,
    }

    impl FakeLayout {
        fn new() -> Self {
            Self {
                container: Some(CONTAINER),
                card: Some(CARD_REST),
                scanner: Some(SCANNER),
            }
        }

        /// Moves the card as the browser would after rendering `pose`.
        fn follow(&mut self, pose: Pose) {
            let p = pose.position;
            self.card = Some(Rect::new(
                CARD_REST.left + p.x,
                CARD_REST.top + p.y,
                CARD_REST.right + p.x,
                CARD_REST.bottom + p.y,
            ));
        }
    }

    impl Layout for FakeLayout {
        fn bounds_of(&self, element: GateElement) -> Result<Rect, LayoutError> {
            let rect = match element {
                GateElement::Container => self.container,
                GateElement::Card => self.card,
                GateElement::Scanner => self.scanner,
            };
            rect.ok_or(LayoutError::NotMounted(element))
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    /// Drags from the card's center to `to`, letting the layout catch up
    /// between moves.
    fn drag_to(gate: &mut GateController, layout: &mut FakeLayout, to: Vec2) {
        let start = layout.card.map(|r| r.center()).unwrap_or(Vec2::ZERO);
        gate.pointer_down(start, &*layout);
        for step in 1..=4 {
            let p = start + (to - start) * (step as f64 / 4.0);
            gate.pointer_move(p, &*layout);
            layout.follow(gate.pose());
        }
        // one more tick so the overlap test sees the final card position
        gate.pointer_move(to, &*layout);
    }

    #[test]
    fn test_rest_without_gesture() {
        let mut gate = GateController::default();
        let layout = FakeLayout::new();
        assert!(gate.pose().is_rest());
        assert!(!gate.pointer_move(Vec2::new(900.0, 10.0), &layout));
        assert_eq!(gate.pointer_up(100.0), Release::Ignored);
        assert_eq!(gate.advance(FrameToken(0), 200.0), FrameStep::Stale);
        assert!(gate.pose().is_rest());
        assert!(!gate.is_dragging());
    }

    #[test]
    fn test_grab_point_preserved() {
        let mut gate = GateController::default();
        let layout = FakeLayout::new();
        // grab 40px right of and 10px below the card's center
        gate.pointer_down(Vec2::new(540.0, 410.0), &layout);
        assert!(gate.pose().is_rest());

        gate.pointer_move(Vec2::new(640.0, 460.0), &layout);
        assert_eq!(gate.pose().position, Vec2::new(100.0, 50.0));
        assert!(approx(gate.pose().rotation.x, 50.0 / 800.0 * 30.0));
        assert!(approx(gate.pose().rotation.y, -(100.0 / 1000.0 * 30.0)));
        assert!(approx(gate.pose().lanyard.x, 30.0));
        assert!(approx(gate.pose().lanyard.y, 10.0));
    }

    #[test]
    fn test_extreme_offset_clamps_rotation() {
        let mut gate = GateController::default();
        let mut layout = FakeLayout::new();
        layout.container = Some(Rect::new(0.0, 0.0, 200.0, 200.0));
        layout.card = Some(Rect::new(50.0, 50.0, 150.0, 150.0));
        gate.pointer_down(Vec2::new(100.0, 100.0), &layout);
        gate.pointer_move(Vec2::new(100.0, 10_100.0), &layout);
        assert_eq!(gate.pose().position.y, 10_000.0);
        assert_eq!(gate.pose().rotation.x, 15.0);
        gate.pointer_move(Vec2::new(-50_000.0, -10_000.0), &layout);
        assert_eq!(gate.pose().rotation.x, -15.0);
        assert_eq!(gate.pose().rotation.y, 15.0);
    }

    #[test]
    fn test_overlap_recomputed_each_move() {
        let mut gate = GateController::default();
        let mut layout = FakeLayout::new();
        drag_to(&mut gate, &mut layout, SCANNER.center());
        assert!(gate.is_over_scanner());

        gate.pointer_move(Vec2::new(500.0, 100.0), &layout);
        layout.follow(gate.pose());
        gate.pointer_move(Vec2::new(500.0, 100.0), &layout);
        assert!(!gate.is_over_scanner());
    }

    #[test]
    fn test_missing_scanner_is_no_overlap() {
        let mut gate = GateController::default();
        let mut layout = FakeLayout::new();
        layout.scanner = None;
        drag_to(&mut gate, &mut layout, SCANNER.center());
        assert!(gate.is_dragging());
        assert!(!gate.is_over_scanner());
        assert!(matches!(gate.pointer_up(0.0), Release::Return(_)));
    }

    #[test]
    fn test_missing_card_at_pointer_down_uses_center() {
        let mut gate = GateController::default();
        let mut layout = FakeLayout::new();
        layout.card = None;
        gate.pointer_down(Vec2::new(600.0, 450.0), &layout);
        assert!(gate.is_dragging());

        // with no grab offset the card centers on the pointer
        gate.pointer_move(Vec2::new(600.0, 450.0), &layout);
        assert_eq!(gate.pose().position, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_missing_card_is_no_overlap() {
        let mut gate = GateController::default();
        let mut layout = FakeLayout::new();
        gate.pointer_down(CARD_REST.center(), &layout);
        layout.card = None;
        assert!(gate.pointer_move(SCANNER.center(), &layout));
        assert!(!gate.is_over_scanner());
        assert!(matches!(gate.pointer_up(0.0), Release::Return(_)));
    }

    #[test]
    fn test_missing_container_ignores_move() {
        let mut gate = GateController::default();
        let mut layout = FakeLayout::new();
        gate.pointer_down(CARD_REST.center(), &layout);
        layout.container = None;
        assert!(!gate.pointer_move(Vec2::new(10.0, 10.0), &layout));
        assert!(gate.pose().is_rest());
        assert!(gate.is_dragging());
    }

    #[test]
    fn test_release_over_scanner_unlocks_once() {
        let mut gate = GateController::default();
        let mut layout = FakeLayout::new();
        drag_to(&mut gate, &mut layout, SCANNER.center());

        let mut unlocks = 0;
        for release in [gate.pointer_up(10.0), gate.pointer_up(11.0)] {
            if release == Release::Unlock {
                unlocks += 1;
            }
        }
        assert_eq!(unlocks, 1);
        assert!(gate.is_unlocked());
        assert!(!gate.is_dragging());
        assert!(!gate.is_over_scanner());
        assert!(!gate.is_returning());
        assert_eq!(gate.active_animation(), None);
    }

    #[test]
    fn test_release_elsewhere_returns_to_rest() {
        let mut gate = GateController::default();
        let layout = FakeLayout::new();
        gate.pointer_down(CARD_REST.center(), &layout);
        gate.pointer_move(CARD_REST.center() + Vec2::new(100.0, 50.0), &layout);
        let start = gate.pose();
        assert_eq!(start.position, Vec2::new(100.0, 50.0));

        let Release::Return(token) = gate.pointer_up(1000.0) else {
            panic!("missed drop should return");
        };
        assert!(!gate.is_dragging());
        assert!(!gate.is_over_scanner());
        assert!(gate.is_returning());

        let FrameStep::Continue(mid) = gate.advance(token, 1400.0) else {
            panic!("animation should be in flight at t=0.5");
        };
        let remaining = 1.0 - 0.765625;
        assert!(approx(mid.position.x, 100.0 * remaining));
        assert!(approx(mid.position.y, 50.0 * remaining));
        assert!(approx(mid.rotation.x, start.rotation.x * remaining));
        assert!(approx(mid.lanyard.y, start.lanyard.y * remaining));

        assert_eq!(gate.advance(token, 1800.0), FrameStep::Settled);
        assert_eq!(gate.pose(), Pose::REST);
        assert!(!gate.is_returning());
        assert_eq!(gate.advance(token, 1816.0), FrameStep::Stale);
        assert_eq!(gate.pose(), Pose::REST);
    }

    #[test]
    fn test_new_gesture_cancels_return() {
        let mut gate = GateController::default();
        let mut layout = FakeLayout::new();
        gate.pointer_down(CARD_REST.center(), &layout);
        gate.pointer_move(CARD_REST.center() + Vec2::new(-200.0, -120.0), &layout);
        let Release::Return(old) = gate.pointer_up(0.0) else {
            panic!("missed drop should return");
        };
        let FrameStep::Continue(mid) = gate.advance(old, 100.0) else {
            panic!("animation should be in flight");
        };
        layout.follow(mid);

        let cancelled = gate.pointer_down(layout.card.unwrap().center(), &layout);
        assert_eq!(cancelled, Some(old));
        assert!(gate.is_dragging());
        // card stays where the animation left it
        assert_eq!(gate.pose().position, mid.position);

        gate.pointer_move(Vec2::new(900.0, 100.0), &layout);
        let dragged = gate.pose();
        assert_eq!(gate.advance(old, 116.0), FrameStep::Stale);
        assert_eq!(gate.advance(old, 5000.0), FrameStep::Stale);
        assert_eq!(gate.pose(), dragged);

        let Release::Return(new) = gate.pointer_up(200.0) else {
            panic!("missed drop should return");
        };
        assert_ne!(new, old);
        assert_eq!(gate.advance(old, 300.0), FrameStep::Stale);
        assert!(matches!(gate.advance(new, 300.0), FrameStep::Continue(_)));
    }

    #[test]
    fn test_pointer_down_while_dragging_keeps_grab() {
        let mut gate = GateController::default();
        let layout = FakeLayout::new();
        gate.pointer_down(CARD_REST.center() + Vec2::new(20.0, 0.0), &layout);
        assert_eq!(gate.pointer_down(Vec2::new(0.0, 0.0), &layout), None);
        gate.pointer_move(CARD_REST.center() + Vec2::new(20.0, 0.0), &layout);
        assert!(gate.pose().is_rest());
    }

    #[test]
    fn test_drag_after_unlock_is_allowed() {
        let mut gate = GateController::default();
        let mut layout = FakeLayout::new();
        drag_to(&mut gate, &mut layout, SCANNER.center());
        assert_eq!(gate.pointer_up(0.0), Release::Unlock);

        gate.pointer_down(SCANNER.center(), &layout);
        assert!(gate.is_dragging());
        assert!(!gate.is_unlocked());
    }
}
