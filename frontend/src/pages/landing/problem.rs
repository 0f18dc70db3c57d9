use yew::prelude::*;

use crate::reveal::component::{Reveal, RevealFrom};

#[function_component(Problem)]
pub fn problem() -> Html {
    html! {
        <section class="flex flex-col items-center justify-center px-8 py-20 gap-20">
            <Reveal class="flex flex-col items-center gap-6 max-w-3xl">
                <h2 class="text-white text-4xl font-bold text-center">
                    {"No te quedés atrás."}
                </h2>
                <p class="text-gray-400 text-xl text-center leading-relaxed">
                    {"La era de la Inteligencia Artificial ya comenzó, y nosotros tenemos una hipótesis: "}
                    <strong>{"la única manera de competir con las grandes telcos es brindando un servicio exclusivo y personalizado"}</strong>
                    {" (¿no es acaso eso lo que siempre distinguió al PyME ISP?)."}
                </p>
            </Reveal>

            <div class="max-w-7xl w-full grid grid-cols-1 lg:grid-cols-3 gap-12 items-center">
                <Reveal class="lg:col-span-2 flex flex-col gap-6">
                    <h2 class="text-white text-4xl font-bold">
                        {"Pero ojo: entendemos que no es escalable"}
                    </h2>
                    <p class="text-gray-400 text-xl leading-relaxed">
                        {"Atender a los primeros clientes sin intermediarios puede ser fácil, pero una vez superado cierto número de conexiones, resulta inevitable delegar. ¿El problema? Cada empleado extra es una inversión de tiempo, capacitación y gestión enormes, y al chatbot genérico, doña Rosa no lo entiende y termina siendo un número más en nuestro CHURN."}
                    </p>
                </Reveal>

                <Reveal class="lg:col-span-1 flex items-center justify-center" from={RevealFrom::Right}>
                    <img src="/donarosablue.png" alt="Doña Rosa" class="w-full h-auto rounded-lg" />
                </Reveal>
            </div>
        </section>
    }
}
