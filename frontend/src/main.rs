use crate::components::{
    map_component::{render_container, LeafletMap},
    workout_form::WorkoutFormView,
    workout_list::WorkoutList,
};
use browser_store::BrowserStore;
use gloo_console::{error, info};
use gloo_timers::callback::Timeout;
use gloo_utils::{document, window};
use page::PageState;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};
use workout_tracker_lib::{
    Coordinates, Field, GeolocationError, TrackerConfig, WorkoutController, WorkoutId, WorkoutKind,
};
use yew::prelude::*;

mod browser_store;
mod components;
mod geolocation;
mod logging;
mod page;

type Controller = WorkoutController<BrowserStore, LeafletMap>;

enum MainMsg {
    PositionFound(Coordinates),
    PositionFailed(GeolocationError),
    MapClicked(Coordinates),
    KindChanged(WorkoutKind),
    FieldChanged(Field, String),
    Submit,
    FormSettled,
    SelectWorkout(WorkoutId),
    Reset,
}

#[derive(PartialEq, Properties)]
struct ModelProps {
    config: TrackerConfig,
}

struct Model {
    controller: Controller,
    page: PageState,
    map_container: HtmlElement,
    distance_ref: NodeRef,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ModelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut controller = Controller::new(BrowserStore, ctx.props().config.clone());
        let mut page = PageState::default();
        controller.restore(&mut page);

        let link = ctx.link().clone();
        geolocation::request_position(
            link.callback(MainMsg::PositionFound),
            link.callback(MainMsg::PositionFailed),
        );

        let container: Element = document().create_element("div").unwrap();
        let container: HtmlElement = container.dyn_into().unwrap();
        container.set_id("map");

        Self {
            controller,
            page,
            map_container: container,
            distance_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::PositionFound(center) => {
                info!(format!("Position found: {}, {}", center.latitude, center.longitude));
                let on_click = ctx.link().callback(MainMsg::MapClicked);
                let map = LeafletMap::create(&self.map_container, center, self.controller.config(), on_click);
                self.controller.attach_map(map);
            }
            MainMsg::PositionFailed(err) => {
                self.controller.geolocation_failed(&err);
            }
            MainMsg::MapClicked(coordinates) => {
                self.controller.map_clicked(coordinates, &mut self.page);
            }
            MainMsg::KindChanged(kind) => {
                self.controller.toggle_input_mode(kind);
                self.page.form.kind = kind;
            }
            MainMsg::FieldChanged(field, value) => {
                self.page.form.set(field, value);
            }
            MainMsg::Submit => {
                let form = self.page.form.clone();
                let submitted = self
                    .controller
                    .submit_pending(&form, &mut self.page)
                    .map(|workout| workout.id());

                match submitted {
                    Ok(_) => {
                        let link = ctx.link().clone();
                        let delay = self.controller.config().form_redisplay_ms;
                        Timeout::new(delay, move || link.send_message(MainMsg::FormSettled)).forget();
                    }
                    Err(err) => {
                        info!(format!("Invalid workout: {err}"));
                        if let Err(err) = window().alert_with_message("Inputs have to be positive numbers") {
                            error!(format!("Failed to show alert: {err:?}"));
                        }
                        return false;
                    }
                }
            }
            MainMsg::FormSettled => {
                self.page.form_settling = false;
            }
            MainMsg::SelectWorkout(id) => {
                self.controller.select_workout(id);
                return false;
            }
            MainMsg::Reset => {
                if let Ok(true) = window().confirm_with_message("Delete all workouts?") {
                    self.controller.reset_all(&mut self.page);
                }
            }
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.page.focus_pending {
            self.page.focus_pending = false;
            if let Some(input) = self.distance_ref.cast::<HtmlInputElement>() {
                if let Err(err) = input.focus() {
                    error!(format!("Failed to focus distance input: {err:?}"));
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! { <>
            <div class="sidebar">
                <h1 class="logo">{"Mapty"}</h1>
                <WorkoutList
                    entries={self.page.entries.clone()}
                    on_select={link.callback(MainMsg::SelectWorkout)}
                >
                    <WorkoutFormView
                        form={self.page.form.clone()}
                        visible={self.page.form_visible}
                        settling={self.page.form_settling}
                        distance_ref={self.distance_ref.clone()}
                        on_kind={link.callback(MainMsg::KindChanged)}
                        on_input={link.callback(|(field, value): (Field, String)| MainMsg::FieldChanged(field, value))}
                        on_submit={link.callback(|()| MainMsg::Submit)}
                    />
                </WorkoutList>
                <button class="reset-btn" onclick={link.callback(|_| MainMsg::Reset)}>
                    {"Reset"}
                </button>
            </div>
            { render_container(&self.map_container) }
        </> }
    }
}

fn main() {
    let config = browser_store::load_config();
    logging::init(&config.log_level);
    yew::Renderer::<Model>::with_props(ModelProps { config }).render();
}
