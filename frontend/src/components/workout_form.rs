use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{Field, WorkoutForm, WorkoutKind};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub form: WorkoutForm,
    pub visible: bool,
    pub settling: bool,
    pub distance_ref: NodeRef,
    pub on_kind: Callback<WorkoutKind>,
    pub on_input: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn WorkoutFormView(props: &WorkoutFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onchange = {
        let on_kind = props.on_kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<WorkoutKind>() {
                Ok(kind) => on_kind.emit(kind),
                Err(err) => error!(err.to_string()),
            }
        })
    };

    let oninput = |field: Field| {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };

    // Only the field for the selected kind is shown
    let shown = Field::for_kind(props.form.kind);
    let row = |field: Field| classes!("form__row", (field != shown).then_some("form__row--hidden"));

    let class = classes!("form", (!props.visible).then_some("hidden"));
    let style = if props.settling { "display: none" } else { "" };
    let kind = props.form.kind;

    html! {
        <form {class} {style} {onsubmit}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" {onchange}>
                    <option value="running" selected={kind == WorkoutKind::Running}>{"Running"}</option>
                    <option value="cycling" selected={kind == WorkoutKind::Cycling}>{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input
                    class="form__input form__input--distance"
                    placeholder="km"
                    ref={props.distance_ref.clone()}
                    value={props.form.distance.clone()}
                    oninput={oninput(Field::Distance)}
                />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input
                    class="form__input form__input--duration"
                    placeholder="min"
                    value={props.form.duration.clone()}
                    oninput={oninput(Field::Duration)}
                />
            </div>
            <div class={row(Field::Cadence)}>
                <label class="form__label">{"Cadence"}</label>
                <input
                    class="form__input form__input--cadence"
                    placeholder="step/min"
                    value={props.form.cadence.clone()}
                    oninput={oninput(Field::Cadence)}
                />
            </div>
            <div class={row(Field::Elevation)}>
                <label class="form__label">{"Elev Gain"}</label>
                <input
                    class="form__input form__input--elevation"
                    placeholder="meters"
                    value={props.form.elevation.clone()}
                    oninput={oninput(Field::Elevation)}
                />
            </div>
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}
