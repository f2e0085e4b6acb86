use payloads::{
    ServiceError,
    notice::{Notice, notice_for},
};
use std::collections::HashMap;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ToastType {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: Option<String>,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            message,
            toast_type,
            duration: Some(5000),
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastType::Info)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl From<Notice> for Toast {
    fn from(notice: Notice) -> Self {
        Toast::error(notice.message).title(notice.title)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: HashMap<Uuid, Toast>,
    /// Insertion order, oldest first.
    pub order: Vec<Uuid>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(
        self: std::rc::Rc<Self>,
        action: Self::Action,
    ) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut order = self.order.clone();

        match action {
            ToastAction::Add(toast) => {
                order.push(toast.id);
                toasts.insert(toast.id, toast);
            }
            ToastAction::Remove(id) => {
                toasts.remove(&id);
                order.retain(|existing| *existing != id);
            }
        }

        std::rc::Rc::new(ToastState { toasts, order })
    }
}

impl ToastState {
    pub fn ordered(&self) -> Vec<Toast> {
        self.order
            .iter()
            .filter_map(|id| self.toasts.get(id))
            .cloned()
            .collect()
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;

        self.context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            let context = self.context.clone();
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.add(Toast::info(message.into()));
    }

    /// Show a failed service call with the title and message its notice
    /// kind prescribes.
    pub fn service_error(&self, error: &ServiceError) {
        self.add(notice_for(error).into());
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

/// Toast a data hook's error whenever a new one comes in.
#[hook]
pub fn use_error_toast(error: Option<ServiceError>) {
    let toast = use_toast();
    use_effect_with(error, move |error| {
        if let Some(error) = error {
            toast.service_error(error);
        }
    });
}
