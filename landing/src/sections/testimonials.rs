use leptos::prelude::*;

use super::use_reveal;
use crate::content::{TESTIMONIALS, TESTIMONIALS_HEADING, Testimonial};
use crate::motion::Entrance;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section">
            <div class="container">
                <h2 class="section-title">{TESTIMONIALS_HEADING}</h2>
                <div class="grid grid-testimonials">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            view! { <TestimonialCard testimonial=*testimonial index=index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, index: usize) -> impl IntoView {
    let style = use_reveal(Entrance::slide_alternating(index));
    // single text nodes, so the quote marks and dash stay attached
    let quote = format!("\"{}\"", testimonial.quote);
    let attribution = format!("- {}", testimonial.name);

    view! {
        <figure class="testimonial-card reveal" style=move || style.get()>
            <blockquote class="testimonial-quote">{quote}</blockquote>
            <figcaption class="testimonial-name">{attribution}</figcaption>
        </figure>
    }
}
