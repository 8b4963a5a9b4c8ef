use cloudcate_web::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
