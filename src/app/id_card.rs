use leptos::{ev, ev::MouseEvent, html, prelude::*};

use crate::gate::{
    FrameStep, FrameToken, GateController, GateElement, Layout, LayoutError, Pose, Rect, Release,
    Vec2,
};

/// Reads gate geometry straight from the mounted elements.
#[derive(Clone, Copy)]
struct DomLayout {
    container: NodeRef<html::Div>,
    card: NodeRef<html::Div>,
    scanner: NodeRef<html::Div>,
}

impl Layout for DomLayout {
    fn bounds_of(&self, element: GateElement) -> Result<Rect, LayoutError> {
        let node = match element {
            GateElement::Container => self.container,
            GateElement::Card => self.card,
            GateElement::Scanner => self.scanner,
        };
        let el = node
            .get_untracked()
            .ok_or(LayoutError::NotMounted(element))?;
        let r = el.get_bounding_client_rect();
        Ok(Rect::new(r.left(), r.top(), r.right(), r.bottom()))
    }
}

fn pointer(ev: &MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn now_ms() -> f64 {
    window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_default()
}

/// Everything the animation loop needs to keep rescheduling itself.
#[derive(Clone, Copy)]
struct FrameLoop {
    gate: StoredValue<GateController>,
    pose: RwSignal<Pose>,
    pending: StoredValue<Option<AnimationFrameRequestHandle>, LocalStorage>,
}

impl FrameLoop {
    fn schedule(self, token: FrameToken) {
        let handle = request_animation_frame_with_handle(move || {
            self.pending.set_value(None);
            let step = self
                .gate
                .try_update_value(|g| g.advance(token, now_ms()))
                .unwrap_or(FrameStep::Stale);
            match step {
                FrameStep::Continue(pose) => {
                    self.pose.set(pose);
                    self.schedule(token);
                }
                FrameStep::Settled => self.pose.set(Pose::REST),
                FrameStep::Stale => {}
            }
        });
        match handle {
            Ok(handle) => self.pending.set_value(Some(handle)),
            Err(e) => log::warn!("couldn't schedule return animation: {e:?}"),
        }
    }

    fn cancel(self) {
        if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
            handle.cancel();
        }
    }
}

#[component]
pub fn IdCardEntry(
    #[prop(into)] on_unlock: Callback<()>,
    #[prop(into)] is_unlocked: Signal<bool>,
) -> impl IntoView {
    let layout = DomLayout {
        container: NodeRef::new(),
        card: NodeRef::new(),
        scanner: NodeRef::new(),
    };
    let gate = StoredValue::new(GateController::default());
    let pose = RwSignal::new(Pose::REST);
    let dragging = RwSignal::new(false);
    let over_scanner = RwSignal::new(false);
    let frames = FrameLoop {
        gate,
        pose,
        pending: StoredValue::new_local(None),
    };
    let listeners = StoredValue::new_local(Vec::<WindowListenerHandle>::new());

    let sync = move || {
        gate.with_value(|g| {
            pose.set(g.pose());
            dragging.set(g.is_dragging());
            over_scanner.set(g.is_over_scanner());
        });
    };

    let release_listeners = move || {
        listeners.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    };

    let handle_move = move |ev: MouseEvent| {
        let moved = gate
            .try_update_value(|g| g.pointer_move(pointer(&ev), &layout))
            .unwrap_or(false);
        if moved {
            sync();
        }
    };

    let handle_up = move |_: MouseEvent| {
        release_listeners();
        let release = gate
            .try_update_value(|g| g.pointer_up(now_ms()))
            .unwrap_or(Release::Ignored);
        sync();
        match release {
            Release::Ignored => {}
            Release::Unlock => {
                log::debug!("id card accepted");
                on_unlock.run(());
            }
            Release::Return(token) => frames.schedule(token),
        }
    };

    let handle_down = move |ev: MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        // the stale frame must not land after the new gesture's first write
        frames.cancel();
        gate.update_value(|g| {
            g.pointer_down(pointer(&ev), &layout);
        });
        sync();
        release_listeners();
        listeners.update_value(|handles| {
            handles.push(window_event_listener(ev::mousemove, handle_move));
            handles.push(window_event_listener(ev::mouseup, handle_up));
        });
    };

    on_cleanup(move || {
        frames.cancel();
        release_listeners();
    });

    let card_class = move || {
        let mut class = String::from(
            "id-card w-80 h-48 rounded-xl cursor-grab active:cursor-grabbing select-none transition-shadow duration-300",
        );
        if dragging.get() {
            class.push_str(" scale-105 shadow-2xl");
        } else if pose.with(|p| p.is_rest()) {
            class.push_str(" animate-swing");
        }
        if is_unlocked.get() {
            class.push_str(" animate-unlock");
        }
        class
    };

    view! {
        <div node_ref=layout.container class="min-h-screen flex items-center justify-center relative">
            <div class="absolute inset-0 bg-gradient-radial from-primary-100/50 via-transparent to-transparent animate-pulse" />

            <div class="absolute top-1/4 text-center">
                <h1 class="text-4xl md:text-6xl font-bold text-foreground mb-4">"Welcome"</h1>
                <p class="text-lg text-muted-foreground mb-8">
                    "Drag the ID card to the scanner to access the portfolio"
                </p>
            </div>

            <div
                node_ref=layout.scanner
                class="scanner-zone absolute bottom-20 left-1/2 -translate-x-1/2 w-80 h-48 rounded-xl flex items-center justify-center"
                class:active=move || over_scanner.get()
            >
                <div class="text-center">
                    <div class="text-2xl mb-2">"🔍"</div>
                    <div class="text-sm text-muted-foreground">"Drop ID card here"</div>
                </div>
            </div>

            <div
                class="lanyard absolute top-0 left-1/2 w-1 h-40 origin-top"
                style:transform=move || pose.with(|p| p.lanyard_transform())
            />

            <div
                node_ref=layout.card
                class=card_class
                style:transform=move || pose.with(|p| p.card_transform())
                style:transform-style="preserve-3d"
                on:mousedown=handle_down
            >
                <IdCardFace />
            </div>
        </div>
    }
}

#[component]
fn IdCardFace() -> impl IntoView {
    view! {
        <div class="h-full p-6 flex flex-col justify-between relative overflow-hidden">
            <div class="flex justify-between items-start">
                <div class="text-xs font-semibold text-primary uppercase tracking-wider">
                    "Professional Portfolio"
                </div>
                <div class="w-8 h-8 bg-primary rounded-full flex items-center justify-center">
                    <span class="text-white text-xs font-bold">"AS"</span>
                </div>
            </div>

            <div class="flex items-center gap-4">
                <div class="w-16 h-20 bg-gradient-to-br from-primary-200 to-primary-300 rounded-lg flex items-center justify-center overflow-hidden">
                    <div class="w-12 h-14 bg-gradient-to-br from-gray-300 to-gray-400 rounded-md flex items-center justify-center">
                        <span class="text-gray-600 text-xs">"PHOTO"</span>
                    </div>
                </div>
                <div class="flex-1">
                    <h3 class="text-lg font-bold text-foreground mb-1">"ANAND S"</h3>
                    <p class="text-xs text-muted-foreground uppercase tracking-wide">
                        "Full-Stack Developer"
                    </p>
                    <p class="text-xs text-muted-foreground">"ID: DEV-2024-001"</p>
                </div>
            </div>

            <div class="text-xs text-muted-foreground">
                <div class="flex justify-between">
                    <span>"Valid: 2024"</span>
                    <span>"Access Level: Premium"</span>
                </div>
            </div>

            <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white/10 to-transparent -translate-x-full animate-shimmer pointer-events-none" />
        </div>
    }
}
