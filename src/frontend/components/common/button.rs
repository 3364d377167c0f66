//! Button component.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn-sm",
            Self::Md => "btn-md",
            Self::Lg => "btn-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Outline,
    #[default]
    Solid,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Outline => "btn-outline",
            Self::Solid => "btn-solid",
        }
    }
}

/// Class list in fixed order: base, size, variant, caller-supplied. The
/// component never reorders or deduplicates; conflicts resolve by
/// stylesheet source order.
pub fn class_list(size: ButtonSize, variant: ButtonVariant, extra: Option<&str>) -> String {
    let mut classes = format!("btn {} {}", size.class(), variant.class());
    if let Some(extra) = extra.filter(|s| !s.is_empty()) {
        classes.push(' ');
        classes.push_str(extra);
    }
    classes
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub variant: ButtonVariant,
    /// Appended after the component's own classes.
    pub class: Option<String>,
    #[props(default)]
    pub disabled: bool,
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Everything else is passed through to the underlying element.
    #[props(extends = button, extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Stateless styled button. Holds no state and has no behavior of its own;
/// clicks, disabling and any further attributes come from the caller.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let ButtonProps {
        size,
        variant,
        class,
        disabled,
        onclick,
        attributes,
        children,
    } = props;

    let classes = class_list(size, variant, class.as_deref());

    rsx! {
        button {
            class: "{classes}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}
