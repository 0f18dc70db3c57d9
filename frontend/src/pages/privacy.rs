use yew::prelude::*;

use crate::config;
use crate::pages::legal::{
    bullets, labeled_bullets, lead, para, ContactCard, LegalPage, Section, SubSection, LINK,
};

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Política de Privacidad">
            <Section number={1} title="Introducción">
                { para("Bienvenido a Macch (\"nosotros\", \"nuestro\" o \"la Plataforma\"). Macch es una solución de atención al cliente basada en inteligencia artificial, operada por Macch. Esta Política de Privacidad describe cómo recopilamos, usamos, almacenamos y protegemos la información personal cuando utilizas nuestros servicios a través de WhatsApp y otras plataformas de mensajería.") }
                { para("Al utilizar nuestros servicios, aceptas las prácticas descritas en esta Política de Privacidad. Si no estás de acuerdo con estas prácticas, te pedimos que no utilices nuestros servicios.") }
            </Section>

            <Section number={2} title="Información que Recopilamos">
                <SubSection number="2.1" title="Información proporcionada directamente">
                    { lead("Cuando interactúas con Macch, podemos recopilar:") }
                    { bullets(&[
                        "Número de teléfono de WhatsApp",
                        "Nombre de perfil de WhatsApp",
                        "Contenido de los mensajes enviados a través de la plataforma",
                        "Información relacionada con consultas de servicio (número de cliente, dirección de servicio, etc.)",
                    ]) }
                </SubSection>
                <SubSection number="2.2" title="Información recopilada automáticamente">
                    { lead("Durante el uso del servicio, recopilamos automáticamente:") }
                    { bullets(&[
                        "Fecha y hora de las interacciones",
                        "Metadatos de mensajes",
                        "Información técnica de la sesión",
                        "Registros de conversación para mejora del servicio",
                    ]) }
                </SubSection>
                <SubSection number="2.3" title="Información de terceros">
                    { para("Podemos recibir información adicional de la empresa de la cual eres cliente para poder atender tus consultas, como estado de cuenta, información técnica de tu servicio y datos relacionados.") }
                </SubSection>
            </Section>

            <Section number={3} title="Uso de la Información">
                { lead("Utilizamos la información recopilada para:") }
                { bullets(&[
                    "Proporcionar y mantener nuestros servicios de atención al cliente",
                    "Responder a tus consultas y solicitudes de soporte",
                    "Mejorar y personalizar la experiencia del usuario",
                    "Entrenar y mejorar nuestros modelos de inteligencia artificial",
                    "Generar análisis y reportes agregados para nuestros clientes empresariales",
                    "Cumplir con obligaciones legales y regulatorias",
                    "Detectar y prevenir fraudes o abusos del servicio",
                ]) }
            </Section>

            <Section number={4} title="Compartición de Información">
                { lead("Podemos compartir tu información con:") }
                <SubSection number="4.1" title="Empresas proveedoras de servicios">
                    { para("Compartimos información relevante de tus consultas con la empresa de la cual eres cliente para que puedan atender tus solicitudes de servicio.") }
                </SubSection>
                <SubSection number="4.2" title="Proveedores de servicios">
                    { para("Trabajamos con terceros que nos ayudan a operar nuestra plataforma, incluyendo servicios de hosting, procesamiento de lenguaje natural y análisis de datos. Estos proveedores están obligados contractualmente a proteger tu información.") }
                </SubSection>
                <SubSection number="4.3" title="Meta/WhatsApp">
                    <p class="text-gray-400 leading-relaxed mb-4">
                        {"Nuestro servicio opera a través de la API de WhatsApp Business. El uso de WhatsApp está sujeto a los "}
                        <a href="https://www.whatsapp.com/legal/terms-of-service" target="_blank" rel="noopener noreferrer" class={LINK}>
                            {"Términos de Servicio"}
                        </a>
                        {" y la "}
                        <a href="https://www.whatsapp.com/legal/privacy-policy" target="_blank" rel="noopener noreferrer" class={LINK}>
                            {"Política de Privacidad de WhatsApp"}
                        </a>
                        {"."}
                    </p>
                </SubSection>
                <SubSection number="4.4" title="Requerimientos legales">
                    { para("Podemos divulgar información cuando sea requerido por ley, orden judicial, o cuando sea necesario para proteger nuestros derechos legales.") }
                </SubSection>
            </Section>

            <Section number={5} title="Retención de Datos">
                { para("Conservamos tu información personal durante el tiempo necesario para cumplir con los fines descritos en esta política, a menos que la ley requiera o permita un período de retención más largo.") }
                { para("Los registros de conversación se conservan por un período de [12 meses] para fines de mejora del servicio y resolución de disputas, después del cual son eliminados o anonimizados.") }
            </Section>

            <Section number={6} title="Seguridad de los Datos">
                { lead("Implementamos medidas de seguridad técnicas y organizativas apropiadas para proteger tu información personal contra acceso no autorizado, alteración, divulgación o destrucción. Estas medidas incluyen:") }
                { bullets(&[
                    "Encriptación de datos en tránsito y en reposo",
                    "Controles de acceso basados en roles",
                    "Monitoreo continuo de seguridad",
                    "Auditorías de seguridad periódicas",
                ]) }
            </Section>

            <Section number={7} title="Tus Derechos">
                { lead("Dependiendo de tu ubicación, puedes tener derecho a:") }
                { labeled_bullets(&[
                    ("Acceso", "Solicitar una copia de la información personal que tenemos sobre ti"),
                    ("Rectificación", "Corregir información inexacta o incompleta"),
                    ("Eliminación", "Solicitar la eliminación de tu información personal"),
                    ("Portabilidad", "Recibir tus datos en un formato estructurado y legible"),
                    ("Oposición", "Oponerte al procesamiento de tus datos personales"),
                    ("Retiro del consentimiento", "Retirar tu consentimiento en cualquier momento"),
                ]) }
                { para("Para ejercer estos derechos, contáctanos usando la información proporcionada al final de esta política.") }
            </Section>

            <Section number={8} title="Transferencias Internacionales">
                { para("Tu información puede ser transferida y procesada en servidores ubicados fuera de tu país de residencia. Nos aseguramos de que dichas transferencias cumplan con las leyes aplicables de protección de datos y que se implementen las salvaguardas apropiadas.") }
            </Section>

            <Section number={9} title="Uso de Inteligencia Artificial">
                { lead("Macch utiliza tecnologías de inteligencia artificial y procesamiento de lenguaje natural para:") }
                { bullets(&[
                    "Comprender y responder a tus consultas",
                    "Clasificar y dirigir solicitudes al área correspondiente",
                    "Mejorar la calidad de las respuestas automatizadas",
                ]) }
                { para("Los datos de conversación pueden ser utilizados para entrenar y mejorar nuestros modelos de IA, siempre de manera que proteja tu privacidad y, cuando sea posible, utilizando datos anonimizados.") }
            </Section>

            <Section number={10} title="Menores de Edad">
                { para("Nuestros servicios no están dirigidos a menores de 18 años. No recopilamos intencionalmente información personal de menores. Si descubrimos que hemos recopilado información de un menor, tomaremos medidas para eliminarla.") }
            </Section>

            <Section number={11} title="Cambios a esta Política">
                { para("Podemos actualizar esta Política de Privacidad periódicamente. Te notificaremos sobre cambios significativos publicando la nueva política en nuestro sitio web y actualizando la fecha de \"última actualización\". Te recomendamos revisar esta política regularmente.") }
            </Section>

            <Section number={12} title="Contacto">
                <ContactCard
                    intro="Si tienes preguntas sobre esta Política de Privacidad o sobre cómo manejamos tu información personal, puedes contactarnos:"
                    name={config::COMPANY}
                    email={config::PRIVACY_EMAIL}
                />
            </Section>

            <Section number={13} title="Autoridad de Control">
                { para("Si consideras que el tratamiento de tus datos personales infringe la normativa aplicable, tienes derecho a presentar una reclamación ante la autoridad de protección de datos de tu país.") }
                <p class="text-gray-400 leading-relaxed">
                    {"En Argentina, puedes contactar a la Agencia de Acceso a la Información Pública (AAIP): "}
                    <a href="https://www.argentina.gob.ar/aaip" target="_blank" rel="noopener noreferrer" class={LINK}>
                        {"www.argentina.gob.ar/aaip"}
                    </a>
                </p>
            </Section>
        </LegalPage>
    }
}
