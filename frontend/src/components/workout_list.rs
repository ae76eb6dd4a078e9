use workout_tracker_lib::{summary::ListEntry, WorkoutId};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutListProps {
    pub entries: Vec<ListEntry>,
    pub on_select: Callback<WorkoutId>,
    #[prop_or_default]
    pub children: Html,
}

/// The form goes on top, followed by the workouts, newest first.
#[function_component]
pub fn WorkoutList(props: &WorkoutListProps) -> Html {
    html! {
        <ul class="workouts">
            { props.children.clone() }
            { for props.entries.iter().rev().map(|entry| workout_item(entry, &props.on_select)) }
        </ul>
    }
}

fn workout_item(entry: &ListEntry, on_select: &Callback<WorkoutId>) -> Html {
    let id = entry.id;
    let onclick = on_select.reform(move |_: MouseEvent| id);

    html! {
        <li key={id.to_string()} class={entry.css_class()} data-id={id.to_string()} {onclick}>
            <h2 class="workout__title">{ entry.title.clone() }</h2>
            { for entry.stats.iter().map(|stat| html! {
                <div class="workout__details">
                    <span class="workout__icon">{ stat.icon }</span>
                    <span class="workout__value">{ stat.value.clone() }</span>
                    <span class="workout__unit">{ stat.unit }</span>
                </div>
            }) }
        </li>
    }
}
