use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub brand_name: &'static str,
    pub dark: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let on_toggle = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <nav class="top-nav">
            <div class="container top-nav-inner">
                <a href="#" class="brand">
                    <i class="fas fa-key brand-mark"></i>
                    <span>{props.brand_name}</span>
                </a>
                <div class="top-nav-actions">
                    <button class="theme-toggle" onclick={on_toggle} aria-label="Toggle dark mode">
                        if props.dark {
                            <i class="fas fa-sun sun"></i>
                        } else {
                            <i class="fas fa-moon"></i>
                        }
                    </button>
                    <a href="#contact" class="btn btn-primary nav-contact">{"Contact Us"}</a>
                </div>
            </div>
        </nav>
    }
}
